use anchor_lang::solana_program::program_error::ProgramError;
use borsh::{BorshDeserialize, BorshSerialize};

/*
Instruction data understood by the escrow program.

Two wire formats exist for the same two instructions and they are not
interchangeable: the packed form carries the amount as a u64 LE, the borsh
form carries it as decimal text in `InstructionPayload::value`.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscrowInstruction {
    /// Amount is what the initializer expects to receive for the escrowed tokens.
    InitEscrow { amount: u64 },
    /// Amount is what the taker expects to receive from the temp token account.
    Exchange { amount: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionEncoding {
    Packed,
    Borsh,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct InstructionPayload {
    pub id: u8,
    pub key: String,
    pub value: String,
}

impl EscrowInstruction {
    pub const INIT_ESCROW: u8 = 0;
    pub const EXCHANGE: u8 = 1;

    pub fn tag(&self) -> u8 {
        match self {
            Self::InitEscrow { .. } => Self::INIT_ESCROW,
            Self::Exchange { .. } => Self::EXCHANGE,
        }
    }

    pub fn amount(&self) -> u64 {
        match self {
            Self::InitEscrow { amount } | Self::Exchange { amount } => *amount,
        }
    }

    fn from_tag(tag: u8, amount: u64) -> Result<Self, ProgramError> {
        match tag {
            Self::INIT_ESCROW => Ok(Self::InitEscrow { amount }),
            Self::EXCHANGE => Ok(Self::Exchange { amount }),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }

    /// `u8 tag | u64 LE amount`
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(9);
        buf.push(self.tag());
        buf.extend_from_slice(&self.amount().to_le_bytes());
        buf
    }

    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (tag, rest) = input
            .split_first()
            .ok_or(ProgramError::InvalidInstructionData)?;
        let amount = rest
            .get(..8)
            .and_then(|slice| slice.try_into().ok())
            .map(u64::from_le_bytes)
            .ok_or(ProgramError::InvalidInstructionData)?;
        Self::from_tag(*tag, amount)
    }

    pub fn to_payload(&self) -> InstructionPayload {
        InstructionPayload {
            id: self.tag(),
            key: String::new(),
            value: self.amount().to_string(),
        }
    }

    pub fn encode(&self, encoding: InstructionEncoding) -> Result<Vec<u8>, ProgramError> {
        match encoding {
            InstructionEncoding::Packed => Ok(self.pack()),
            InstructionEncoding::Borsh => self
                .to_payload()
                .try_to_vec()
                .map_err(|e| ProgramError::BorshIoError(e.to_string())),
        }
    }

    pub fn decode(input: &[u8], encoding: InstructionEncoding) -> Result<Self, ProgramError> {
        match encoding {
            InstructionEncoding::Packed => Self::unpack(input),
            InstructionEncoding::Borsh => {
                let payload = InstructionPayload::try_from_slice(input)
                    .map_err(|_| ProgramError::InvalidInstructionData)?;
                Self::try_from(&payload)
            }
        }
    }
}

impl TryFrom<&InstructionPayload> for EscrowInstruction {
    type Error = ProgramError;

    fn try_from(payload: &InstructionPayload) -> Result<Self, Self::Error> {
        let amount = payload
            .value
            .parse::<u64>()
            .map_err(|_| ProgramError::InvalidInstructionData)?;
        Self::from_tag(payload.id, amount)
    }
}
