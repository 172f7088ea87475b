use calculi_mu::{
    ArityMismatch, Evaluator, Library, MuError, evaluate_mu_recursive, minimisation, parse_func,
    primitive_recursion, projection,
};
use calculi_tests::{mu_value, utils::arith_file};
use pretty_assertions::assert_eq;

mu_value!(five, "sum", [2, 3] => 5);
mu_value!(pred_two, "pred", [2] => 1);
mu_value!(pred_zero, "pred", [0] => 0);
mu_value!(sub_eight_three, "sub", [8, 3] => 5);
mu_value!(sub_truncates, "sub", [5, 9] => 0);
mu_value!(mul_small, "mul", [2, 4] => 8);
mu_value!(mul_by_zero, "mul", [3, 0] => 0);
mu_value!(mul_zero_by, "mul", [0, 9] => 0);
mu_value!(mul_large, "mul", [9, 25] => 225);
mu_value!(sgn_zero, "sgn", [0] => 0);
mu_value!(sgn_five, "sgn", [5] => 1);
mu_value!(lt_true, "lt", [2, 3] => 1);
mu_value!(lt_false, "lt", [9, 1] => 0);
mu_value!(gt_true, "gt", [5, 3] => 1);
mu_value!(gt_false, "gt", [8, 12] => 0);
mu_value!(eq_true, "eq", [5, 5] => 1);
mu_value!(eq_false, "eq", [3, 2] => 0);
mu_value!(neq_true, "neq", [8, 9] => 1);
mu_value!(neq_false, "neq", [5, 5] => 0);
mu_value!(square_seven, "square", [7] => 49);
mu_value!(square_zero, "square", [0] => 0);
mu_value!(sqrt_zero, "sqrt", [0] => 0);
mu_value!(sqrt_one, "sqrt", [1] => 1);
mu_value!(sqrt_twenty_five, "sqrt", [25] => 5);

#[test]
fn file_matches_the_built_in_library() {
    let file = arith_file();
    let standard = Library::standard().unwrap();
    assert_eq!(file.len(), 13);
    for (name, func) in file.iter() {
        assert_eq!(Some(func), standard.get(name), "`{}` differs", name);
    }
}

#[test]
fn sqrt_of_non_square_is_undefined() {
    let sqrt = calculi_tests::utils::arith("sqrt");
    let res = Evaluator::with_search_limit(20).evaluate(&sqrt, &[6]);
    assert_eq!(res, Err(MuError::SearchLimitExceeded { limit: 20 }));
}

#[test]
fn projection_out_of_range_is_rejected() {
    assert_eq!(
        projection(1, 3),
        Err(MuError::ArityMismatch(ArityMismatch::Projection { arity: 1, index: 3 }))
    );
}

#[test]
fn projections_pick_their_argument() {
    let args = [3, 1, 4, 1, 5];
    for (i, &x) in args.iter().enumerate() {
        let p = projection(args.len(), i + 1).unwrap();
        assert_eq!(evaluate_mu_recursive(&p, &args), Ok(x));
    }
}

#[test]
fn recursion_unfolds_like_its_definition() {
    // f(0, x) = g(x), f(y + 1, x) = h(y, f(y, x), x)
    let lib = Library::standard().unwrap();
    let g = lib.get("square").unwrap().clone();
    let h = parse_func("comp(sum, proj(3, 2), comp(mul, proj(3, 1), proj(3, 3)))", &lib).unwrap();
    let f = primitive_recursion(g.clone(), h.clone()).unwrap();
    for x in 0..4 {
        assert_eq!(evaluate_mu_recursive(&f, &[0, x]), evaluate_mu_recursive(&g, &[x]));
        for y in 0..4 {
            let prev = evaluate_mu_recursive(&f, &[y, x]).unwrap();
            assert_eq!(evaluate_mu_recursive(&f, &[y + 1, x]), evaluate_mu_recursive(&h, &[y, prev, x]));
        }
    }
}

#[test]
fn minimisation_is_least() {
    // least z with x -' z * z = 0, i.e. the ceiling of the square root
    let lib = Library::standard().unwrap();
    let body = parse_func("comp(sub, proj(2, 2), comp(square, proj(2, 1)))", &lib).unwrap();
    let isqrt = minimisation(body.clone()).unwrap();
    for x in 0..20 {
        let z = evaluate_mu_recursive(&isqrt, &[x]).unwrap();
        assert_eq!(evaluate_mu_recursive(&body, &[z, x]), Ok(0));
        for w in 0..z {
            assert!(evaluate_mu_recursive(&body, &[w, x]).unwrap() > 0);
        }
    }
}

#[test]
fn printing_round_trips() {
    let lib = Library::new();
    for (_, func) in Library::standard().unwrap().iter() {
        assert_eq!(parse_func(&func.to_string(), &lib).as_ref(), Ok(func));
    }
}
