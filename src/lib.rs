use log::debug;

use crate::{
    elements::ElementLookup,
    formula::{
        charge::extract_charge,
        normalize::normalize,
        parser::{check_tags, tokenize},
        Error, Formula,
    },
};

pub mod elements;
pub mod formula;
pub mod markup;
pub mod session;

/// Parses formula markup such as `H<sub>2</sub>O` or `S<sub>1</sub>O<sub>4</sub><sup>2-</sup>`
/// into its element pairs and net charge.
pub fn compute<E>(input: &str, elements: &E) -> Result<Formula, Error>
where
    E: ElementLookup + ?Sized,
{
    let normalized = normalize(input);
    check_tags(&normalized)?;

    let (remaining, charge) = extract_charge(&normalized);
    let pairs = tokenize(&remaining, elements)?;
    debug!(
        "computed {} pairs with charge {charge} from {input:?}",
        pairs.len()
    );

    Ok(Formula { pairs, charge })
}
