use formula_engineering::{
    lookup_function, registered_functions, EngineeringSettings, ErrorKind, Value,
};
use pretty_assertions::assert_eq;

use super::harness::{err, num, text, TestCalc};

#[test]
fn every_engineering_function_is_registered() {
    let mut names: Vec<&str> = registered_functions().map(|spec| spec.name).collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec![
            "BIN2DEC",
            "BIN2HEX",
            "BIN2OCT",
            "BITAND",
            "BITLSHIFT",
            "BITOR",
            "BITRSHIFT",
            "BITXOR",
            "DEC2BIN",
            "DEC2HEX",
            "DEC2OCT",
            "HEX2BIN",
            "HEX2DEC",
            "HEX2OCT",
            "OCT2BIN",
            "OCT2DEC",
            "OCT2HEX",
        ]
    );
}

#[test]
fn lookup_is_case_insensitive_and_accepts_xlfn_prefix() {
    assert_eq!(lookup_function("bin2dec").map(|s| s.name), Some("BIN2DEC"));
    assert_eq!(lookup_function("_xlfn.BITAND").map(|s| s.name), Some("BITAND"));
    assert!(lookup_function("BASE").is_none());
}

#[test]
fn call_function_validates_name_and_arity() {
    let calc = TestCalc::new();

    assert_eq!(calc.call("NOPE", &[num(1.0)]), err(ErrorKind::Name));
    assert_eq!(calc.call("BIN2DEC", &[]), err(ErrorKind::Value));
    assert_eq!(
        calc.call("BIN2DEC", &[text("1"), text("1")]),
        err(ErrorKind::Value)
    );
    assert_eq!(calc.call("BITAND", &[num(1.0)]), err(ErrorKind::Value));
    assert_eq!(
        calc.call("DEC2BIN", &[num(1.0), num(2.0), num(3.0)]),
        err(ErrorKind::Value)
    );
    assert_eq!(calc.call("bitand", &[num(5.0), num(3.0)]), Value::Number(1.0));
}

#[test]
fn implementations_called_directly_reject_missing_arguments() {
    let settings = EngineeringSettings::default();

    for spec in registered_functions() {
        assert_eq!(
            (spec.implementation)(&settings, &[]),
            err(ErrorKind::Value),
            "{}",
            spec.name
        );
    }
    let bitand = lookup_function("BITAND").unwrap();
    assert_eq!((bitand.implementation)(&settings, &[num(1.0)]), err(ErrorKind::Value));
}
