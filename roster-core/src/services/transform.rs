//! Transformation: derive, aggregate, merge, sort

use std::cmp::Ordering;

use crate::domain::result::{Error, Result};
use crate::domain::{CityAggregate, User, UserReportRow};

/// Users with their derived columns, plus the aggregate they were joined on
#[derive(Debug, Clone)]
pub struct TransformedUsers {
    pub rows: Vec<UserReportRow>,
    pub cities: CityAggregate,
}

/// Run the user transformation stages in order
///
/// Derives the email domain, counts users per city, left-joins the counts
/// back onto each user and sorts the result.
pub fn transform_users(users: Vec<User>) -> Result<TransformedUsers> {
    let with_domains = derive_email_domains(users)?;
    let cities = CityAggregate::from_cities(with_domains.iter().map(|(user, _)| user.city.as_str()));
    tracing::debug!(cities = cities.len(), "aggregated users by city");

    let mut rows = merge_city_counts(with_domains, &cities);
    sort_rows(&mut rows);

    Ok(TransformedUsers { rows, cities })
}

/// Pair every user with its email domain
///
/// Fails on the first email without an `@`.
pub fn derive_email_domains(users: Vec<User>) -> Result<Vec<(User, String)>> {
    users
        .into_iter()
        .map(|user| {
            let domain = user
                .email_domain()
                .map(str::to_string)
                .ok_or_else(|| {
                    Error::validation(format!(
                        "user {} has an email without '@': {}",
                        user.id, user.email
                    ))
                })?;
            Ok((user, domain))
        })
        .collect()
}

/// Left join users onto the city aggregate
///
/// A city missing from the aggregate gets a count of 0.
pub fn merge_city_counts(
    users: Vec<(User, String)>,
    cities: &CityAggregate,
) -> Vec<UserReportRow> {
    users
        .into_iter()
        .map(|(user, email_domain)| {
            let user_count = cities.count_for(&user.city).unwrap_or(0);
            UserReportRow {
                user,
                email_domain,
                user_count,
            }
        })
        .collect()
}

/// Sort by user_count descending, then name ascending
///
/// Stable: rows equal on both keys keep their incoming order.
pub fn sort_rows(rows: &mut [UserReportRow]) {
    rows.sort_by(compare_rows);
}

fn compare_rows(a: &UserReportRow, b: &UserReportRow) -> Ordering {
    b.user_count
        .cmp(&a.user_count)
        .then_with(|| a.user.name.cmp(&b.user.name))
}
