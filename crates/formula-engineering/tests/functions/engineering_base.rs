use formula_engineering::{EngineeringSettings, ErrorKind, NegativePlaces, Value};
use pretty_assertions::assert_eq;

use super::harness::{assert_number, assert_text, err, num, text, TestCalc};

const MAX_BASE_2: f64 = 512.0;
const MAX_BASE_8: f64 = 536_870_912.0;
const MAX_BASE_16: f64 = 549_755_813_888.0;

const TO_DECIMAL: [&str; 3] = ["BIN2DEC", "OCT2DEC", "HEX2DEC"];
const FROM_DECIMAL: [&str; 3] = ["DEC2BIN", "DEC2OCT", "DEC2HEX"];

#[test]
fn to_decimal_matches_expected_values() {
    let calc = TestCalc::new();

    for name in TO_DECIMAL {
        assert_number(&calc.call(name, &[text("0")]), 0.0);
        assert_number(&calc.call(name, &[num(0.0)]), 0.0);
        assert_number(&calc.call(name, &[Value::Blank]), 0.0);
    }

    assert_number(&calc.call("BIN2DEC", &[text("111111111")]), 511.0);
    assert_number(&calc.call("BIN2DEC", &[text("1000000000")]), -512.0);
    assert_number(&calc.call("BIN2DEC", &[num(1010.0)]), 10.0);
    assert_number(&calc.call("OCT2DEC", &[text("7777777777")]), -1.0);
    assert_number(&calc.call("OCT2DEC", &[text("17")]), 15.0);
    assert_number(&calc.call("HEX2DEC", &[text("9999999999")]), -439_804_651_111.0);
    assert_number(&calc.call("HEX2DEC", &[text("f10000001f")]), -64_424_509_409.0);
    assert_number(&calc.call("HEX2DEC", &[text("FFFFFFFFFF")]), -1.0);
}

#[test]
fn to_decimal_rejects_invalid_input() {
    let calc = TestCalc::new();

    assert_eq!(calc.call("BIN2DEC", &[num(3.5)]), err(ErrorKind::Num));
    assert_eq!(calc.call("OCT2DEC", &[num(3.5)]), err(ErrorKind::Num));
    assert_eq!(calc.call("HEX2DEC", &[text("3.5")]), err(ErrorKind::Num));
    assert_eq!(calc.call("OCT2DEC", &[text("11111111111")]), err(ErrorKind::Num));
    assert_eq!(calc.call("HEX2DEC", &[text("11111111111")]), err(ErrorKind::Num));
    assert_eq!(calc.call("BIN2DEC", &[text("xyzzy")]), err(ErrorKind::Num));
    assert_eq!(calc.call("OCT2DEC", &[text("a")]), err(ErrorKind::Num));
    assert_eq!(calc.call("BIN2DEC", &[text("")]), err(ErrorKind::Num));

    for name in TO_DECIMAL {
        assert_eq!(calc.call(name, &[num(-1.0)]), err(ErrorKind::Num), "{name}");
        assert_eq!(
            calc.call(name, &[Value::Bool(true)]),
            err(ErrorKind::Value),
            "{name}"
        );
        for kind in ErrorKind::ALL {
            assert_eq!(calc.call(name, &[err(kind)]), err(kind), "{name}");
        }
    }
}

#[test]
fn from_decimal_respects_signed_range() {
    let calc = TestCalc::new();

    let cases = [
        ("DEC2BIN", MAX_BASE_2, "111111111", "1000000000"),
        ("DEC2OCT", MAX_BASE_8, "3777777777", "4000000000"),
        ("DEC2HEX", MAX_BASE_16, "7FFFFFFFFF", "8000000000"),
    ];
    for (name, threshold, max, min) in cases {
        assert_eq!(calc.call(name, &[num(threshold)]), err(ErrorKind::Num));
        assert_text(&calc.call(name, &[num(threshold - 1.0)]), max);
        assert_text(&calc.call(name, &[num(-threshold)]), min);
        assert_eq!(calc.call(name, &[num(-threshold - 1.0)]), err(ErrorKind::Num));
    }

    assert_text(&calc.call("DEC2BIN", &[num(-1.0)]), "1111111111");
    assert_text(&calc.call("DEC2HEX", &[num(255.0)]), "FF");
    assert_text(&calc.call("DEC2OCT", &[text("15")]), "17");
    assert_text(&calc.call("DEC2BIN", &[num(3.5)]), "11");
    assert_eq!(calc.call("DEC2BIN", &[text("3.5")]), err(ErrorKind::Num));
}

#[test]
fn from_decimal_rejects_invalid_input() {
    let calc = TestCalc::new();

    for name in FROM_DECIMAL {
        assert_eq!(calc.call(name, &[text("xyzzy")]), err(ErrorKind::Value));
        assert_eq!(calc.call(name, &[Value::Bool(true)]), err(ErrorKind::Value));
        for kind in ErrorKind::ALL {
            assert_eq!(calc.call(name, &[err(kind)]), err(kind));
        }
    }
}

#[test]
fn from_decimal_places() {
    let calc = TestCalc::new();

    for name in FROM_DECIMAL {
        assert_eq!(calc.call(name, &[num(100.0), num(1.0)]), err(ErrorKind::Num));
    }
    assert_text(&calc.call("DEC2BIN", &[Value::Blank, num(3.0)]), "000");
    assert_eq!(calc.call("DEC2OCT", &[Value::Blank, num(0.0)]), err(ErrorKind::Num));
    assert_text(&calc.call("DEC2HEX", &[Value::Blank, num(1.0)]), "0");
    assert_text(&calc.call("DEC2BIN", &[num(10.0), num(6.0)]), "001010");
    assert_text(&calc.call("DEC2BIN", &[num(10.0), num(11.0)]), "00000001010");
    assert_text(&calc.call("DEC2HEX", &[num(255.0), num(12.0)]), "0000000000FF");
    assert_eq!(
        calc.call("DEC2BIN", &[num(10.0), Value::Bool(true)]),
        err(ErrorKind::Value)
    );
    assert_eq!(
        calc.call("DEC2BIN", &[num(10.0), err(ErrorKind::Div0)]),
        err(ErrorKind::Div0)
    );
}

#[test]
fn max_places_setting_caps_padding() {
    let calc = TestCalc::with_settings(EngineeringSettings {
        max_places: 10,
        ..EngineeringSettings::default()
    });

    assert_text(&calc.call("DEC2BIN", &[num(10.0), num(10.0)]), "0000001010");
    assert_eq!(calc.call("DEC2BIN", &[num(10.0), num(11.0)]), err(ErrorKind::Num));
    assert_eq!(
        calc.call("HEX2BIN", &[text("F"), num(12.0)]),
        err(ErrorKind::Num)
    );
}

#[test]
fn negative_places_follow_settings() {
    let pad = TestCalc::new();
    assert_text(&pad.call("DEC2BIN", &[num(-1.0), num(10.0)]), "1111111111");
    assert_eq!(pad.call("DEC2BIN", &[num(-1.0), num(3.0)]), err(ErrorKind::Num));

    let ignore = TestCalc::with_settings(EngineeringSettings {
        negative_places: NegativePlaces::Ignore,
        ..EngineeringSettings::default()
    });
    assert_text(&ignore.call("DEC2BIN", &[num(-1.0), num(3.0)]), "1111111111");
    assert_text(&ignore.call("DEC2HEX", &[num(-2.0), num(1.0)]), "FFFFFFFFFE");
    assert_text(&ignore.call("DEC2HEX", &[num(2.0), num(3.0)]), "002");
}

#[test]
fn base_to_base_conversions() {
    let calc = TestCalc::new();

    let cases: &[(&str, &str, Value)] = &[
        ("BIN2OCT", "111111111", text("777")),
        ("BIN2HEX", "111111111", text("1FF")),
        ("OCT2BIN", "7777777777", text("1111111111")),
        ("OCT2HEX", "7777777777", text("FFFFFFFFFF")),
        ("HEX2BIN", "9999999999", err(ErrorKind::Num)),
        ("HEX2OCT", "9999999999", err(ErrorKind::Num)),
        ("BIN2OCT", "1000000000", text("7777777000")),
        ("BIN2HEX", "1000000000", text("FFFFFFFE00")),
        ("OCT2BIN", "11111111111", err(ErrorKind::Num)),
        ("OCT2HEX", "11111111111", err(ErrorKind::Num)),
        ("HEX2BIN", "11111111111", err(ErrorKind::Num)),
        ("HEX2OCT", "11111111111", err(ErrorKind::Num)),
        ("BIN2OCT", "fffffffffe", err(ErrorKind::Num)),
        ("BIN2HEX", "fffffffffe", err(ErrorKind::Num)),
        ("OCT2BIN", "a", err(ErrorKind::Num)),
        ("OCT2HEX", "a", err(ErrorKind::Num)),
        ("HEX2BIN", "fffffffffe", text("1111111110")),
        ("HEX2OCT", "fffffffffe", text("7777777776")),
    ];
    for (name, input, expected) in cases {
        assert_eq!(&calc.call(name, &[text(input)]), expected, "{name}({input})");
    }
}

#[test]
fn base_to_base_blank_input() {
    let calc = TestCalc::new();

    assert_eq!(calc.call("BIN2OCT", &[Value::Blank]), err(ErrorKind::Num));
    assert_eq!(calc.call("BIN2HEX", &[Value::Blank]), err(ErrorKind::Num));
    for name in ["OCT2BIN", "OCT2HEX", "HEX2BIN", "HEX2OCT"] {
        assert_text(&calc.call(name, &[Value::Blank]), "0");
    }
}

#[test]
fn base_to_base_shared_edge_cases() {
    let calc = TestCalc::new();
    let names = ["BIN2OCT", "BIN2HEX", "OCT2BIN", "OCT2HEX", "HEX2BIN", "HEX2OCT"];

    for name in names {
        assert_eq!(calc.call(name, &[Value::Bool(true)]), err(ErrorKind::Value));
        assert_eq!(calc.call(name, &[num(-1.0)]), err(ErrorKind::Num));
        assert_eq!(calc.call(name, &[text("-1")]), err(ErrorKind::Num));
        assert_eq!(calc.call(name, &[text("3.5")]), err(ErrorKind::Num));
        assert_eq!(calc.call(name, &[num(3.5)]), err(ErrorKind::Num));
        assert_text(&calc.call(name, &[text("0")]), "0");
        assert_text(&calc.call(name, &[num(0.0)]), "0");
        for kind in ErrorKind::ALL {
            assert_eq!(calc.call(name, &[err(kind)]), err(kind));
        }
    }
}

#[test]
fn base_to_base_places() {
    let calc = TestCalc::new();

    assert_text(&calc.call("BIN2HEX", &[text("1111"), num(4.0)]), "000F");
    assert_text(&calc.call("HEX2BIN", &[text("F"), num(8.0)]), "00001111");
    assert_text(&calc.call("HEX2BIN", &[text("F"), num(12.0)]), "000000001111");
    assert_eq!(calc.call("HEX2BIN", &[text("F"), num(2.0)]), err(ErrorKind::Num));
    assert_eq!(
        calc.call("OCT2HEX", &[text("17"), text("two")]),
        err(ErrorKind::Value)
    );
}
