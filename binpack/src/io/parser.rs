use std::fmt::Display;
use std::str::FromStr;

use crate::entities::BPInstance;
use crate::io::into_malformed;
use crate::{BPError, Result};

/// Parses an instance from its textual description.
///
/// The description is a stream of whitespace-separated integer tokens:
/// `item_count bin_capacity weight_1 ... weight_item_count`.
/// No header, no comments, and no tokens beyond the last weight are allowed.
pub fn parse_instance(description: &str) -> Result<BPInstance> {
    let mut tokens = description.split_whitespace().enumerate();

    let item_count: usize = next_token(&mut tokens, "item count")?;
    let bin_capacity: u64 = next_token(&mut tokens, "bin capacity")?;
    let weights = (0..item_count)
        .map(|item_id| next_token(&mut tokens, format_args!("weight of item {item_id}")))
        .collect::<Result<Vec<u64>>>()?;

    if let Some((pos, token)) = tokens.next() {
        return Err(BPError::MalformedInstance(format!(
            "unexpected trailing token {token:?} at position {pos}, expected exactly {} tokens",
            item_count + 2
        )));
    }

    BPInstance::new(item_count, bin_capacity, weights).map_err(into_malformed)
}

fn next_token<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = (usize, &'a str)>,
    what: impl Display,
) -> Result<T> {
    match tokens.next() {
        None => Err(BPError::MalformedInstance(format!(
            "unexpected end of description, missing {what}"
        ))),
        Some((pos, token)) => token.parse::<T>().map_err(|_| {
            BPError::MalformedInstance(format!(
                "{what} at position {pos} should be a non-negative integer, got {token:?}"
            ))
        }),
    }
}
