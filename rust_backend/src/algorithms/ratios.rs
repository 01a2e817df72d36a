/// Divide `a` by `b`, returning `None` when the ratio is undefined.
///
/// A zero divisor or a non-finite quotient yields `None` rather than zero, so
/// callers cannot confuse "no data" with "perfect efficiency".
///
/// # Examples
///
/// ```
/// use herd_analytics::algorithms::safe_div;
///
/// assert_eq!(safe_div(200.0, 50.0), Some(4.0));
/// assert_eq!(safe_div(1.0, 0.0), None);
/// ```
pub fn safe_div(a: f64, b: f64) -> Option<f64> {
    if b == 0.0 {
        return None;
    }
    let q = a / b;
    q.is_finite().then_some(q)
}
