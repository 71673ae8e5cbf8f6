#[cfg(test)]
mod tests {
    use super::super::dispatch::{operate, Operation, UnknownOperation};
    use super::super::evaluate::evaluate;
    use crate::algebra::AlgebraError;
    use crate::display::DisplayConfig;
    use crate::notation::parse_and_build;

    #[test]
    fn test_operation_names() {
        assert_eq!("multiply".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!(" Divide ".parse::<Operation>().unwrap(), Operation::Divide);
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }

        let err = "power".parse::<Operation>().unwrap_err();
        assert_eq!(err, UnknownOperation("power".to_string()));
        assert!(err.to_string().contains("'power'"));
    }

    #[test]
    fn test_operation_expressions() {
        assert_eq!(Operation::Add.expression(), "p + q");
        assert_eq!(Operation::Subtract.expression(), "p - q");
        assert_eq!(Operation::Multiply.expression(), "pq");
        assert_eq!(Operation::Divide.expression(), "pq^{-1}");
    }

    #[test]
    fn test_complex_multiplication_scenario() {
        let evaluation = evaluate(
            Operation::Multiply,
            "2+3i",
            "1-1i",
            &DisplayConfig::default(),
        )
        .unwrap();

        assert_eq!(evaluation.result.coefficients(), vec![5.0, 1.0]);
        assert_eq!(evaluation.decimals, Some(0));
        assert_eq!(evaluation.formatted, "5 + 1i");
        assert_eq!(evaluation.summary(), "pq = 5 + 1i");
    }

    #[test]
    fn test_quaternion_units() {
        let evaluation = evaluate(
            Operation::Multiply,
            "0+1i+0j+0k",
            "0+0i+1j+0k",
            &DisplayConfig::default(),
        )
        .unwrap();
        assert_eq!(evaluation.formatted, "0 + 0i + 0j + 1k");

        let evaluation = evaluate(
            Operation::Multiply,
            "0+0i+1j+0k",
            "0+1i+0j+0k",
            &DisplayConfig::default(),
        )
        .unwrap();
        assert_eq!(evaluation.formatted, "0 + 0i + 0j - 1k");
    }

    #[test]
    fn test_divide_by_self() {
        let evaluation =
            evaluate(Operation::Divide, "1+1i", "1+1i", &DisplayConfig::default()).unwrap();
        assert_eq!(evaluation.formatted, "1 + 0i");
    }

    #[test]
    fn test_precision_policies() {
        let auto = evaluate(Operation::Add, "0.1+0.2i", "0.2+0.1i", &DisplayConfig::default())
            .unwrap();
        assert_eq!(auto.formatted, "0.3 + 0.3i");

        let full =
            evaluate(Operation::Add, "0.1+0.2i", "0.2+0.1i", &DisplayConfig::full()).unwrap();
        assert_eq!(full.decimals, None);
        assert_eq!(full.formatted, "0.30000000000000004 + 0.30000000000000004i");

        let fixed = evaluate(
            Operation::Subtract,
            "3.5+1i",
            "1+0.25i",
            &DisplayConfig::fixed(2),
        )
        .unwrap();
        assert_eq!(fixed.formatted, "2.50 + 0.75i");
    }

    #[test]
    fn test_invalid_dimension_is_reported() {
        let p = parse_and_build("7").unwrap();
        assert!(p.is_valid_dimension());

        let q = parse_and_build("1+1i+1j").unwrap();
        assert!(!q.is_valid_dimension());

        for op in Operation::ALL {
            assert_eq!(operate(op, &q, &q), Err(AlgebraError::InvalidDimension(3)));
            assert_eq!(operate(op, &p, &q), Err(AlgebraError::InvalidDimension(3)));
        }
    }

    #[test]
    fn test_dimension_mismatch_is_reported() {
        let result = evaluate(Operation::Add, "1+2i", "3", &DisplayConfig::default());
        assert_eq!(
            result.unwrap_err(),
            AlgebraError::DimensionMismatch { left: 2, right: 1 }
        );
    }

    #[test]
    fn test_division_by_zero_is_reported() {
        let result = evaluate(Operation::Divide, "1+2i", "0+0i", &DisplayConfig::default());
        assert_eq!(result.unwrap_err(), AlgebraError::DivisionByZero);

        let result = evaluate(Operation::Divide, "4", "0", &DisplayConfig::default());
        assert_eq!(result.unwrap_err(), AlgebraError::DivisionByZero);
    }

    #[test]
    fn test_malformed_operand_is_reported() {
        let result = evaluate(Operation::Add, "2+i", "1", &DisplayConfig::default());
        assert!(matches!(result, Err(AlgebraError::MalformedNotation(_))));
    }

    #[test]
    fn test_evaluation_serializes() {
        let evaluation = evaluate(
            Operation::Multiply,
            "2+3i",
            "1-1i",
            &DisplayConfig::default(),
        )
        .unwrap();
        let json = serde_json::to_value(&evaluation).unwrap();

        assert_eq!(json["operation"], "multiply");
        assert_eq!(json["expression"], "pq");
        assert_eq!(json["decimals"], 0);
        assert_eq!(json["formatted"], "5 + 1i");
        assert_eq!(json["result"][1]["unit"], "i");
        assert_eq!(json["result"][1]["coefficient"], 1.0);
    }
}
