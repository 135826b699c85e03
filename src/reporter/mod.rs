pub mod json;
pub mod terminal;

use crate::rules::Report;

pub trait Reporter {
    fn report(&self, report: &Report) -> String;
}
