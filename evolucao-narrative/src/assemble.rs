use crate::sections::{blood_gas, cardiovascular, functional, neuro, respiratory};
use crate::Assessment;

/// Assessment paragraph: neuro/pain, respiratory, blood gas, cardiovascular,
/// functional, in that order. Sections that render nothing are skipped.
pub fn assemble(assessment: &Assessment<'_>) -> String {
    let sections = [
        neuro::build(assessment),
        respiratory::build(assessment),
        blood_gas::build(assessment),
        cardiovascular::build(assessment),
        functional::build(assessment),
    ];

    sections
        .into_iter()
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
