use nom::bytes::complete::take_till1;
use nom::character::complete::{digit1, multispace0, multispace1};
use nom::combinator::{all_consuming, map_res};
use nom::multi::many0;
use nom::sequence::{pair, preceded, terminated};
use nom::IResult;

use crate::error::DictionaryError;

/// A dictionary as written on disk: a word count followed by whitespace separated words.
#[derive(Debug, PartialEq)]
pub struct Dictionary<'a> {
    pub declared: usize,
    /// The first `declared` tokens.
    pub words: Vec<&'a str>,
    /// Tokens found after the declared words.
    pub extra: Vec<&'a str>,
}

fn count(input: &str) -> IResult<&str, usize> {
    preceded(multispace0, map_res(digit1, str::parse::<usize>))(input)
}

// Any run of non-whitespace; the alphabet is checked when the word reaches the trie.
fn token(input: &str) -> IResult<&str, &str> {
    preceded(multispace1, take_till1(char::is_whitespace))(input)
}

fn raw_dictionary(input: &str) -> IResult<&str, (usize, Vec<&str>)> {
    all_consuming(terminated(pair(count, many0(token)), multispace0))(input)
}

pub fn dictionary(input: &str) -> Result<Dictionary<'_>, DictionaryError> {
    let (_, (declared, mut tokens)) = raw_dictionary(input)
        .map_err(|_| DictionaryError::BadHeader)?;

    if tokens.len() < declared {
        return Err(DictionaryError::Truncated { expected: declared, found: tokens.len() });
    }
    let extra = tokens.split_off(declared);
    Ok(Dictionary { declared, words: tokens, extra })
}
