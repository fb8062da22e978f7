use poise::serenity_prelude::UserId;
use std::collections::HashMap;
use tracing::warn;

/// Friends of `user_id` who list `user_id` back, in the order `user_id` lists them.
pub fn mutual_friends(table: &HashMap<String, Vec<u64>>, user_id: UserId) -> Vec<UserId> {
    let me = user_id.get();
    let Some(listed) = table.get(&me.to_string()) else {
        return Vec::new();
    };
    listed
        .iter()
        .copied()
        .filter(|&id| id != 0 && id != me)
        .filter(|&id| {
            table
                .get(&id.to_string())
                .is_some_and(|theirs| theirs.contains(&me))
        })
        .map(UserId::new)
        .collect()
}

/// Log entries that can never take part in a friendship. Returns how many were found.
pub fn check_relationships(table: &HashMap<String, Vec<u64>>) -> usize {
    let mut problems = 0;
    for (owner, friends) in table {
        match owner.parse::<u64>() {
            Ok(0) | Err(_) => {
                warn!("Ignoring relationships for invalid user id '{}'", owner);
                problems += 1;
            }
            Ok(id) => {
                if friends.contains(&0) {
                    warn!("Relationships for {} contain a zero user id", owner);
                    problems += 1;
                }
                if friends.contains(&id) {
                    warn!("User {} lists themselves as a friend", owner);
                    problems += 1;
                }
            }
        }
    }
    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &[u64])]) -> HashMap<String, Vec<u64>> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_vec()))
            .collect()
    }

    #[test]
    fn only_two_way_entries_count() {
        let t = table(&[("1", &[2, 3, 4]), ("2", &[1]), ("3", &[5]), ("4", &[1, 2])]);
        assert_eq!(
            mutual_friends(&t, UserId::new(1)),
            vec![UserId::new(2), UserId::new(4)]
        );
        assert!(mutual_friends(&t, UserId::new(3)).is_empty());
    }

    #[test]
    fn unknown_user_has_no_friends() {
        let t = table(&[("1", &[2])]);
        assert!(mutual_friends(&t, UserId::new(9)).is_empty());
    }

    #[test]
    fn self_and_zero_entries_are_skipped() {
        let t = table(&[("1", &[0, 1, 2]), ("2", &[1])]);
        assert_eq!(mutual_friends(&t, UserId::new(1)), vec![UserId::new(2)]);
    }

    #[test]
    fn flags_bad_keys_and_ids() {
        let t = table(&[("abc", &[1]), ("0", &[]), ("5", &[0, 6]), ("6", &[5])]);
        assert_eq!(check_relationships(&t), 3);
    }

    #[test]
    fn flags_self_listing() {
        let t = table(&[("1", &[1, 2]), ("2", &[1])]);
        assert_eq!(check_relationships(&t), 1);
        assert_eq!(mutual_friends(&t, UserId::new(1)), vec![UserId::new(2)]);
    }
}
