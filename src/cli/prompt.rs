//! Interactive console front end
//!
//! A [`PromptSession`] asks for the purchase scenario one question at a
//! time, re-prompting on answers it cannot use, then prints the itemized
//! result and an optional sale price suggestion. It works over any
//! `BufRead`/`Write` pair so sessions can be scripted.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::core::input::{
    parse_decimal, parse_yes_no, validate_margin, validate_purchase_value, validate_rate,
};
use crate::core::money::{format_amount, format_percent};
use crate::core::Result;
use crate::modules::costs::models::{CostResult, TaxScenario};
use crate::modules::costs::services::CostCalculator;
use crate::modules::pricing::models::PriceSuggestion;
use crate::modules::pricing::services::PricingAdvisor;

const RULE_WIDTH: usize = 60;

/// Everything a finished session computed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub scenario: TaxScenario,
    pub result: CostResult,
    pub suggestion: Option<PriceSuggestion>,
}

pub struct PromptSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run one full calculation
    pub fn run(&mut self) -> Result<SessionReport> {
        self.print_banner()?;

        let scenario = self.collect_scenario()?;
        let result = CostCalculator::new().calculate(&scenario);
        self.print_result(&result)?;

        let suggestion = if self.ask_yes_no("\nCalculate a suggested SALE PRICE from a margin (%)?")? {
            let margin = self.ask_decimal(
                "Desired margin in % (e.g. 10 for 10% profit): ",
                validate_margin,
            )?;
            let suggestion = PricingAdvisor::new().suggest(&result, margin);
            self.print_suggestion(&suggestion)?;
            Some(suggestion)
        } else {
            None
        };

        writeln!(self.output, "\nDone.")?;
        self.output.flush()?;

        Ok(SessionReport {
            scenario,
            result,
            suggestion,
        })
    }

    fn collect_scenario(&mut self) -> Result<TaxScenario> {
        let purchase_value = self.ask_decimal(
            "PURCHASE VALUE of the item (e.g. 4,50): ",
            validate_purchase_value,
        )?;
        let mut scenario = TaxScenario::new(purchase_value);

        if self.ask_yes_no("Does this purchase generate an ICMS CREDIT?")? {
            let icms_rate = self.ask_decimal("ICMS credit rate (e.g. 19 for 19%): ", |rate| {
                validate_rate("ICMS", rate)
            })?;
            scenario = scenario.with_icms_credit(icms_rate);
        }

        if self.ask_yes_no("Does this purchase generate a PIS/COFINS CREDIT?")? {
            let pis_rate = self.ask_decimal("PIS credit rate (e.g. 1,65 for 1.65%): ", |rate| {
                validate_rate("PIS", rate)
            })?;
            let cofins_rate = self
                .ask_decimal("COFINS credit rate (e.g. 7,6 for 7.6%): ", |rate| {
                    validate_rate("COFINS", rate)
                })?;
            scenario = scenario.with_pis_cofins_credit(pis_rate, cofins_rate);
        }

        debug!(?scenario, "Collected scenario from console");
        Ok(scenario)
    }

    /// Ask until the answer parses and passes `validate`
    pub fn ask_decimal<F>(&mut self, question: &str, validate: F) -> Result<Decimal>
    where
        F: Fn(Decimal) -> Result<Decimal>,
    {
        loop {
            let answer = self.ask_line(question)?;
            match parse_decimal(&answer).and_then(&validate) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    warn!("Rejected console answer '{}': {}", answer.trim(), err);
                    writeln!(self.output, "{}. Please try again.", err)?;
                }
            }
        }
    }

    /// Ask a yes/no question until the answer is recognized
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        loop {
            let answer = self.ask_line(&format!("{} (y/n): ", question))?;
            match parse_yes_no(&answer) {
                Some(value) => return Ok(value),
                None => writeln!(self.output, "Invalid answer, type 'y' or 'n'.")?,
            }
        }
    }

    fn ask_line(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }

        Ok(line)
    }

    fn print_banner(&mut self) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, " NET COST CALCULATOR (ICMS + PIS/COFINS) ")?;
        writeln!(self.output, "{}", rule)?;
        writeln!(
            self.output,
            "Values may be typed with a comma or a point as decimal separator.\n"
        )?;
        Ok(())
    }

    fn print_section(&mut self, title: &str) -> Result<()> {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(self.output, "\n{}", rule)?;
        writeln!(self.output, " {} ", title)?;
        writeln!(self.output, "{}", rule)?;
        Ok(())
    }

    fn print_result(&mut self, result: &CostResult) -> Result<()> {
        self.print_section("CALCULATION RESULT")?;
        let rows = [
            ("Purchase value", result.purchase_value),
            ("ICMS credit", result.icms_credit),
            ("PIS credit", result.pis_credit),
            ("COFINS credit", result.cofins_credit),
            ("Total credits", result.total_credits),
            ("NET COST", result.net_cost),
        ];
        for (label, amount) in rows {
            writeln!(self.output, "{:.<23}: {}", label, format_amount(amount))?;
        }
        Ok(())
    }

    fn print_suggestion(&mut self, suggestion: &PriceSuggestion) -> Result<()> {
        self.print_section("SUGGESTED SALE PRICE")?;
        writeln!(
            self.output,
            "{:.<23}: {}",
            "Desired margin",
            format_percent(suggestion.margin_percent)
        )?;
        writeln!(
            self.output,
            "{:.<23}: {}",
            "Minimum sale price",
            format_amount(suggestion.sale_price)
        )?;
        Ok(())
    }
}
