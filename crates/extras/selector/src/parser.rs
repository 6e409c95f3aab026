use nom::branch::alt;
use nom::bytes::complete::take_while1;
use nom::character::complete::{char, multispace0, multispace1};
use nom::combinator::{all_consuming, map, opt};
use nom::multi::{many0, separated_list1};
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};

use crate::{Combinator, Complex, Compound, Simple};

pub(crate) fn selector(input: &str) -> Result<Vec<Complex>, nom::Err<nom::error::Error<&str>>> {
    let separator = delimited(multispace0, char(','), multispace0);

    all_consuming(delimited(
        multispace0,
        separated_list1(separator, complex),
        multispace0,
    ))
    .parse(input)
    .map(|(_, complexes)| complexes)
}

fn complex(input: &str) -> IResult<&str, Complex> {
    let (input, first) = compound(input)?;
    let (input, rest) = many0((combinator, compound)).parse(input)?;

    let mut compounds = vec![first];
    let mut combinators = Vec::with_capacity(rest.len());

    for (combinator, compound) in rest {
        combinators.push(combinator);
        compounds.push(compound);
    }

    Ok((
        input,
        Complex {
            compounds,
            combinators,
        },
    ))
}

fn combinator(input: &str) -> IResult<&str, Combinator> {
    alt((
        map(delimited(multispace0, char('>'), multispace0), |_| {
            Combinator::Child
        }),
        map(multispace1, |_| Combinator::Descendant),
    ))
    .parse(input)
}

fn compound(input: &str) -> IResult<&str, Compound> {
    let (rest, (tag, simples)) = (opt(type_selector), many0(simple)).parse(input)?;

    if rest.len() == input.len() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Verify,
        )));
    }

    Ok((
        rest,
        Compound {
            tag: tag.flatten().map(str::to_owned),
            simples,
        },
    ))
}

/// A type name, or `None` for the universal selector.
fn type_selector(input: &str) -> IResult<&str, Option<&str>> {
    alt((map(identifier, Some), map(char('*'), |_| None))).parse(input)
}

fn simple(input: &str) -> IResult<&str, Simple> {
    alt((
        map(preceded(char('#'), identifier), |id: &str| {
            Simple::Id(id.to_owned())
        }),
        map(preceded(char('.'), identifier), |class: &str| {
            Simple::Class(class.to_owned())
        }),
    ))
    .parse(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_').parse(input)
}
