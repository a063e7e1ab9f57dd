//! Domain models for the dan de engine.
//!
//! This module contains the number universe, the validated criteria model,
//! the generated ladder types, the special dan filters, and API contracts.

pub mod criteria;
pub mod dande;
pub mod dto;
pub mod filter;
pub mod number;
pub mod special_set;
pub mod universe;

pub use criteria::{Criteria, ValidationError};
pub use dande::{Batch, BatchMetadata, Draw, Ladder, Level};
pub use dto::{
    ApiResponse, CategoryDanRequest, CategoryResponse, GenerateDanDeRequest, HeadTailRequest,
    QuickDanRequest, SpecialDanResponse, SpecialSetResponse, TouchDanRequest,
};
pub use filter::{CategoryFilter, HeadTailFilter, TouchFilter};
pub use number::Number;
pub use special_set::SpecialSet;
pub use universe::{Category, NumberUniverse};
