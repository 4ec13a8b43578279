use abacus::{
    calculator::{action::Operator, state::State},
    display::{FormatOptions, Locale, Screen, format_operand},
    replay,
};

fn en(operand: &str) -> String {
    format_operand(Some(operand), &FormatOptions::default())
}

#[test]
fn integer_part_is_grouped() {
    assert_eq!(en("1"), "1");
    assert_eq!(en("999"), "999");
    assert_eq!(en("1000"), "1,000");
    assert_eq!(en("1234.5"), "1,234.5");
    assert_eq!(en("123456789"), "123,456,789");
    assert_eq!(en("-1234567"), "-1,234,567");
}

#[test]
fn fraction_is_kept_verbatim() {
    assert_eq!(en("1234.56789"), "1,234.56789");
    assert_eq!(en("0.000"), "0.000");
    assert_eq!(en("5."), "5.");
}

#[test]
fn empty_integer_part_shows_zero() {
    assert_eq!(en(".5"), "0.5");
    assert_eq!(en("."), "0.");
}

#[test]
fn leading_zeros_are_dropped() {
    assert_eq!(en("07"), "7");
    assert_eq!(en("0001000"), "1,000");
    assert_eq!(en("0"), "0");
}

#[test]
fn non_numeric_values_are_shown_as_is() {
    assert_eq!(en("Infinity"), "Infinity");
    assert_eq!(en("-Infinity"), "-Infinity");
    assert_eq!(en("NaN"), "NaN");
    assert_eq!(en("-"), "-");
}

#[test]
fn absent_operand_shows_nothing() {
    assert_eq!(format_operand(None, &FormatOptions::default()), "");
}

#[test]
fn empty_operand_shows_zero() {
    assert_eq!(en(""), "0");
    assert_eq!(format_operand(Some(""), &Locale::Plain.options()), "0");
}

#[test]
fn empty_result_is_not_blank() {
    let screen = replay(". + 1 =", FormatOptions::default()).unwrap();
    assert_eq!(screen.primary, "0");

    let screen = replay(". + 1 = DEL", FormatOptions::default()).unwrap();
    assert_eq!(screen.primary, "");
}

#[test]
fn locales_change_separators() {
    let de = Locale::DeDe.options();
    let fr = Locale::FrFr.options();
    let plain = Locale::Plain.options();

    assert_eq!(format_operand(Some("1234567.25"), &de), "1.234.567,25");
    assert_eq!(format_operand(Some("1234567.25"), &fr), "1\u{202f}234\u{202f}567,25");
    assert_eq!(format_operand(Some("1234567.25"), &plain), "1234567.25");
    assert_eq!(format_operand(Some("0012."), &plain), "12.");
}

#[test]
fn locale_names_parse() {
    assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::EnUs);
    assert_eq!("de_DE".parse::<Locale>().unwrap(), Locale::DeDe);
    assert_eq!("plain".parse::<Locale>().unwrap(), Locale::Plain);
    assert!("tlh".parse::<Locale>().is_err());
}

#[test]
fn screen_shows_pending_operation() {
    let state = State::new(Some("1234"), Some(Operator::Divide), Some("5.0"));
    let screen = Screen::new(&state, &FormatOptions::default());

    assert_eq!(screen.secondary, "1,234 ÷");
    assert_eq!(screen.primary, "5.0");
    assert_eq!(screen.to_string(), "1,234 ÷\n5.0");
}

#[test]
fn screen_of_empty_state() {
    let screen = Screen::new(&State::default(), &FormatOptions::default());
    assert_eq!(screen.secondary, " ");
    assert_eq!(screen.primary, "");
}
