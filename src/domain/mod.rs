//! Domain Layer
//!
//! The list engine itself - pure logic over owned tree values.
//!
//! ## Structure
//!
//! - `entities/` - List items and trees
//! - `value_objects/` - Drop locations, editing styles, selections
//! - `services/` - Search, rebuild, selection and row flattening
//! - `policies/` - Deselect and missing-target rules
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **Pure Functions** - Inputs are borrowed, results are new owned values
//! 3. **No hidden state** - Nothing is retained between calls

pub mod entities;
pub mod policies;
pub mod services;
pub mod value_objects;
