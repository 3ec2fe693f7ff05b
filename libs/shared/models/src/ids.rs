/// Next display identifier for a collection, e.g. `P004` after `P001..P003`.
///
/// The number is one past both the collection length and the highest numeric
/// suffix already carrying `prefix`, so it stays unique even when stored ids
/// have gaps or were edited by hand.
pub fn next_id<'a, I>(prefix: &str, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut count = 0u32;
    let mut highest = 0u32;

    for id in existing {
        count += 1;
        if let Some(n) = id.strip_prefix(prefix).and_then(|rest| rest.parse::<u32>().ok()) {
            highest = highest.max(n);
        }
    }

    format!("{}{:03}", prefix, count.max(highest) + 1)
}
