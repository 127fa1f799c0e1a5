// Entity Models
//
// Value objects with no identity beyond their code:
// - Account: one node of the chart
// - Level1Category: the hand-authored top-level groupings

pub mod account;
pub mod category;

pub use account::{Account, AccountType};
pub use category::{CategoryTable, Language, Level1Category};
