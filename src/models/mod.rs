pub mod direction;
pub mod records;
pub mod timestamp;
pub mod trade_record;

pub use direction::*;
pub use records::{Bias, Dated, Review, ReviewDraft, Rule, RuleDraft};
pub use timestamp::parse_timestamp;
pub use trade_record::{Tag, TradeRecord};
