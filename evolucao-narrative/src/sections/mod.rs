//! One paragraph builder per clinical domain.
//!
//! Every builder takes the whole assessment and never fails: absent fields
//! drop their clause or fall back to fixed default wording.

pub mod blood_gas;
pub mod cardiovascular;
pub mod functional;
pub mod neuro;
pub mod respiratory;
