use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundMeError {
    InsufficientValue = 1,      // Contribution worth less than the USD minimum
    Unauthorized = 2,           // Caller is not the owner
    FunderIndexOutOfBounds = 3, // No funder at the requested position
    InvalidPrice = 4,           // Price feed answered zero or a negative price
    ArithmeticOverflow = 5,     // Conversion overflowed i128
    NotInitialized = 6,         // Constructor state missing
}
