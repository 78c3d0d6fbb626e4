// Scripted console sessions
//
// Feeds answers through an in-memory reader and checks both the computed
// report and what the user sees.

use std::io::Cursor;

use netcost::cli::PromptSession;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

fn run_script(script: &str) -> (netcost::core::Result<netcost::cli::SessionReport>, String) {
    let mut output = Vec::new();
    let report = {
        let mut session = PromptSession::new(Cursor::new(script.as_bytes()), &mut output);
        session.run()
    };
    (report, String::from_utf8(output).unwrap())
}

#[test]
fn test_full_session_with_credits_and_margin() {
    // value, ICMS?, rate, PIS/COFINS?, PIS, COFINS, margin?, margin
    let (report, output) = run_script("4,50\ns\n19\nsim\n1,65\n7,6\ns\n10\n");
    let report = report.unwrap();

    assert_eq!(report.scenario.purchase_value, dec!(4.50));
    assert!(report.scenario.has_icms_credit);
    assert!(report.scenario.has_pis_cofins_credit);
    assert_eq!(report.result.net_cost, dec!(3.2287));

    let suggestion = report.suggestion.unwrap();
    // 3.2287 × 1.1 = 3.55157
    assert_eq!(suggestion.sale_price, dec!(3.5516));

    assert!(output.contains("R$ 4.5000"));
    assert!(output.contains("R$ 0.0743"));
    assert!(output.contains("R$ 1.2713"));
    assert!(output.contains("R$ 3.2287"));
    assert!(output.contains("10.00%"));
    assert!(output.contains("R$ 3.5516"));
}

#[test]
fn test_session_without_credits_skips_rate_questions() {
    let (report, output) = run_script("1234,5\nn\nn\nn\n");
    let report = report.unwrap();

    assert_eq!(report.scenario.icms_rate, Decimal::ZERO);
    assert_eq!(report.result.total_credits, Decimal::ZERO);
    assert_eq!(report.result.net_cost, dec!(1234.5));
    assert!(report.suggestion.is_none());

    assert!(!output.contains("ICMS credit rate"));
    assert!(output.contains("R$ 1,234.5000"));
}

#[test]
fn test_invalid_answers_are_asked_again() {
    // bad number, bad yes/no, out-of-range rate before the valid ones
    let (report, output) = run_script("abc\n100\ntalvez\ny\n150\n18\nn\nn\n");
    let report = report.unwrap();

    assert_eq!(report.scenario.icms_rate, dec!(18));
    assert_eq!(report.result.icms_credit, dec!(18));
    assert_eq!(report.result.net_cost, dec!(82));

    assert!(output.contains("Invalid number"));
    assert!(output.contains("Invalid answer"));
    assert!(output.contains("ICMS rate must be between 0 and 100"));
}

#[test]
fn test_input_ending_early_aborts() {
    let (report, _) = run_script("10\ns\n");
    assert!(report.is_err());
}

#[test]
fn test_huge_purchase_value_is_asked_again() {
    // 3e28 at full rates would overflow; the session must re-prompt instead
    let (report, output) = run_script(
        "30000000000000000000000000000\n1000000000000000000000000\ny\n100\ny\n100\n100\ny\n1000\n",
    );
    let report = report.unwrap();

    let limit = Decimal::from_str("1000000000000000000000000").unwrap();
    assert_eq!(report.scenario.purchase_value, limit);
    assert_eq!(report.result.net_cost, -(limit * Decimal::TWO));
    assert_eq!(
        report.suggestion.unwrap().sale_price,
        -(limit * Decimal::from(22))
    );
    assert!(output.contains("Purchase value must not exceed"));
}
