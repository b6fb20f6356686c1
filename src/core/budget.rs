/// Check whether a weekly rent sits inside the budget range (inclusive)
///
/// A skewed range (min > max) never contains anything, so such profiles
/// only ever receive the midpoint penalty.
#[inline]
pub fn is_within_budget(rent: f64, budget_min: f64, budget_max: f64) -> bool {
    budget_min <= rent && rent <= budget_max
}

/// Distance of a rent from the middle of the budget range
#[inline]
pub fn midpoint_distance(rent: f64, budget_min: f64, budget_max: f64) -> f64 {
    let mid = (budget_min + budget_max) / 2.0;
    (rent - mid).abs()
}

/// Budget term of the match score
///
/// In range: flat bonus. Out of range: negative penalty that grows with
/// the distance from the budget midpoint.
#[inline]
pub fn calculate_budget_score(
    rent: f64,
    budget_min: f64,
    budget_max: f64,
    in_budget_bonus: f64,
    penalty_divisor: f64,
) -> f64 {
    if is_within_budget(rent, budget_min, budget_max) {
        in_budget_bonus
    } else {
        -midpoint_distance(rent, budget_min, budget_max) / penalty_divisor
    }
}
