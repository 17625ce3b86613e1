//! Argument resolution for the informer and lister generators
//!
//! Command-line values are first collected verbatim into [`RawArgs`], then
//! resolved in one pass into [`GeneratorArgs`] and [`CustomArgs`], and finally
//! checked by [`ConfigValidator`].

pub mod custom;
pub mod generic;
pub mod gv_packages;
pub mod gv_types;
pub mod input_base;
pub mod kind;
pub mod plural;
pub mod raw;
pub mod validation;


pub use custom::CustomArgs;
pub use generic::GeneratorArgs;
pub use gv_packages::{parse_input_token, GroupVersionsBuilder, INPUT_FLAG};
pub use gv_types::{
    collect_overrides, parse_override_token, IncludedTypesOverrides,
    INCLUDED_TYPES_OVERRIDES_FLAG,
};
pub use input_base::{InputBaseResolver, DEFAULT_INPUT_BASE};
pub use kind::GeneratorKind;
pub use plural::{PluralExceptions, DEFAULT_PLURAL_EXCEPTIONS, PLURAL_EXCEPTIONS_FLAG};
pub use raw::RawArgs;
pub use validation::{ConfigValidator, EmptyGroupsPolicy};
