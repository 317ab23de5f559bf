//! Default argument hashing for memoized functions.

use crate::value::Value;

/// Key used for calls made with no arguments.
pub const NO_ARGS_KEY: &str = "__noArgs";

/// Keys a call by the string form of its first argument.
///
/// Further arguments are ignored; callers that need multi-argument or
/// structural keys supply their own hash function.
pub fn default_memo_hash(args: &[Value]) -> String {
    match args.first() {
        Some(first) => first.to_string(),
        None => NO_ARGS_KEY.to_string(),
    }
}
