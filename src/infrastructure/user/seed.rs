use crate::domain::user::NewUser;

/// Users present at startup; they receive ids 1 to 4 in this order
pub fn default_users() -> Vec<NewUser> {
    ["VanVTT", "TrungHN", "HuyHM", "ThaoDTD"]
        .into_iter()
        .map(NewUser::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_users() {
        let names: Vec<String> = default_users()
            .iter()
            .map(|u| u.name().to_string())
            .collect();

        assert_eq!(names, vec!["VanVTT", "TrungHN", "HuyHM", "ThaoDTD"]);
    }
}
