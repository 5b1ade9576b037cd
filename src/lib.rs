//! A minimal, type-safe flag set over closed enumerations, written in pure
//! Rust. `no_std`, no heap / `alloc`, no `unsafe`, just `core`.
//!
//! [`FlagSet`] is the main struct in this library. It packs the members of a
//! [`FlagEnum`] into a single unsigned integer, one bit per member, and only
//! accepts members of that one enumeration. Its [features](#features) are
//! listed below.
//!
//! # Examples
//! ```
//! use light_flagset::{FlagSet, flag_enum};
//!
//! flag_enum! {
//!     #[derive(Debug)]
//!     pub enum Permission: u8 {
//!         Read,
//!         Write,
//!         Execute,
//!     }
//!     impl ops;
//! }
//!
//! let mut perms = Permission::Read | Permission::Write;
//! assert!(perms.contains(Permission::Read));
//! assert!(!perms.contains(Permission::Execute));
//! perms.unset(Permission::Write);
//! assert_eq!(perms.len(), 1);
//! assert_eq!(perms.raw_value(), 0b001);
//! assert_eq!((!perms).iter().collect::<Vec<_>>(), [Permission::Write, Permission::Execute]);
//! ```
//!
//! # Enumeration contract
//!
//! Member values are bit *indices*, not masks: the member with value `k`
//! occupies bit `k`. An enumeration has at most 64 members and its storage is
//! the unsigned integer of the enumeration's width. Sparse enumerations
//! declare the mask of legal bits explicitly with `const ALL = ..;`. Every
//! rule is checked at compile time, see [`flag_enum!`] and [`FlagEnum`].
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - Storage is a single `u8`, `u16`, `u32` or `u64`, chosen per enumeration
//! - Compile-time validation of the enumeration contract
//! - Set algebra on sets and members:
//!   - `|`, `&`, `^`, `!`, `-`
//!   - `|=`, `&=`, `^=`, `-=`
//!   - opt-in operators on bare members via `impl ops;`
//! - Membership tests: `contains`, `all_of`, `any_of`, `none_of`
//! - Ascending and descending iteration over present members:
//!   - `iter()` (double-ended)
//!   - `cursor_front()` / `cursor_back()` (bidirectional cursor)
//! - `[A, B]` rendering through `Display` when the members implement it
//! - `raw_value()` / `from_raw()` for storage and interop

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod bits;
pub mod contract;
mod flag_set;
mod iter;
mod macros;

pub use bits::FlagBits;
pub use contract::{Domain, FlagEnum, domain_mask};
pub use flag_set::FlagSet;
pub use iter::{Cursor, Iter};
