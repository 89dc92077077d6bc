mod auth;
mod enums;
mod invest;
mod language;
mod pool;
mod profile;
mod referral;
mod withdraw;

pub use auth::*;
pub use enums::*;
pub use invest::*;
pub use language::*;
pub use pool::*;
pub use profile::*;
pub use referral::*;
pub use withdraw::*;
