// ABOUTME: Byte-oriented reader: tokenizes and builds one value tree per call

use crate::error::InterpError;
use crate::interpreter::Interpreter;
use crate::value::ValueId;
use nom::bytes::complete::{tag, take_while, take_while1};

const MAX_TOKEN_LEN: usize = 32;

fn is_space(b: u8) -> bool {
    b == b' '
}

fn is_token_byte(b: u8) -> bool {
    !matches!(b, b' ' | b'(' | b')')
}

fn skip_spaces(input: &[u8]) -> &[u8] {
    take_while::<_, _, nom::error::Error<&[u8]>>(is_space)(input)
        .map(|(rest, _)| rest)
        .unwrap_or(input)
}

/// Reads exactly one value from the front of `input`, returning the
/// allocated value and the unconsumed remainder.
pub fn read<'a>(interp: &mut Interpreter, input: &'a [u8]) -> Result<(ValueId, &'a [u8]), InterpError> {
    let input = skip_spaces(input);
    if input.is_empty() {
        return Err(InterpError::UnexpectedEOF);
    }

    if input[0] == b')' {
        return Err(InterpError::UnbalancedParen);
    }

    if input[0] == b'(' {
        return read_list(interp, &input[1..]);
    }

    if let Ok((rest, _)) = tag::<_, _, nom::error::Error<&[u8]>>(&b"'()"[..])(input) {
        return Ok((interp.alloc_empty(), rest));
    }

    read_token(interp, input)
}

fn read_list<'a>(interp: &mut Interpreter, mut input: &'a [u8]) -> Result<(ValueId, &'a [u8]), InterpError> {
    let mut items = Vec::new();
    loop {
        input = skip_spaces(input);
        if input.is_empty() {
            return Err(InterpError::UnexpectedEOF);
        }
        if input[0] == b')' {
            input = &input[1..];
            break;
        }
        let (item, rest) = read(interp, input)?;
        items.push(item);
        input = rest;
    }
    Ok((interp.alloc_list(items), input))
}

fn read_token<'a>(interp: &mut Interpreter, input: &'a [u8]) -> Result<(ValueId, &'a [u8]), InterpError> {
    let (rest, token) = take_while1::<_, _, nom::error::Error<&[u8]>>(is_token_byte)(input)
        .map_err(|_| InterpError::UnexpectedEOF)?;

    if token.len() > MAX_TOKEN_LEN {
        return Err(InterpError::TokenTooLong { length: token.len() });
    }

    let text = std::str::from_utf8(token).unwrap_or("");
    let value = match parse_integer(text) {
        Some(n) => interp.alloc_integer(n),
        None => interp.alloc_symbol(text),
    };
    Ok((value, rest))
}

/// Base-0 integer literal conventions, matching C's `strtol(s, NULL, 0)`:
/// optional sign, `0x`/`0X` hex prefix, leading `0` octal, otherwise decimal.
fn parse_integer(text: &str) -> Option<i64> {
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, text.strip_prefix('+').unwrap_or(text)),
    };
    if rest.is_empty() {
        return None;
    }
    let magnitude = if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()?
    } else if rest.len() > 1 && rest.starts_with('0') {
        i64::from_str_radix(&rest[1..], 8).ok()?
    } else {
        rest.parse::<i64>().ok()?
    };
    Some(sign.wrapping_mul(magnitude))
}
