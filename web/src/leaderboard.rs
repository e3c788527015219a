use crate::utils::*;
use gloo::storage::{LocalStorage, Storage};
use slither_core::Leaderboard;
use yew::prelude::*;

impl StorageKey for Leaderboard {
    const KEY: &'static str = "snakeHighScores";
}

/// Reads the stored leaderboard once, absent or unreadable data gives an empty one.
pub(crate) fn load_leaderboard() -> Leaderboard {
    match LocalStorage::raw().get_item(Leaderboard::KEY) {
        Ok(Some(json)) => Leaderboard::from_json(&json),
        Ok(None) => {
            log::debug!("no stored leaderboard");
            Leaderboard::default()
        }
        Err(err) => {
            log::warn!("could not read leaderboard: {:?}", err);
            Leaderboard::default()
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct LeaderboardProps {
    pub leaderboard: Leaderboard,
}

#[function_component]
pub(crate) fn LeaderboardView(props: &LeaderboardProps) -> Html {
    let records = props.leaderboard.records();

    html! {
        <aside class="leaderboard">
            <h2>{"Leaderboard"}</h2>
            if records.is_empty() {
                <p class="empty">{"No records yet"}</p>
            } else {
                <ol>
                    {
                        for records.iter().enumerate().map(|(rank, record)| html! {
                            <li class={classes!(rank_class(rank))}>
                                <span class="rank">{format!("#{}", rank + 1)}</span>
                                <span class="score">{record.score.to_string()}</span>
                                <time>{record.day()}</time>
                            </li>
                        })
                    }
                </ol>
            }
        </aside>
    }
}

fn rank_class(rank: usize) -> &'static str {
    match rank {
        0 => "gold",
        1 => "silver",
        2 => "bronze",
        _ => "rest",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_key_matches_existing_saves() {
        assert_eq!(<Leaderboard as StorageKey>::KEY, "snakeHighScores");
    }

    #[test]
    fn podium_gets_medal_classes() {
        assert_eq!(rank_class(0), "gold");
        assert_eq!(rank_class(2), "bronze");
        assert_eq!(rank_class(9), "rest");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use slither_core::ScoreRecord;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn saved_leaderboard_loads_back() {
        let mut leaderboard = Leaderboard::default();
        leaderboard.insert(ScoreRecord::new(90, "2024/01/01 10:00:00"));
        leaderboard.insert(ScoreRecord::new(100, "2024/01/02 10:00:00"));
        leaderboard.local_save();

        let loaded = load_leaderboard();
        LocalStorage::delete(Leaderboard::KEY);

        assert_eq!(loaded, leaderboard);
        assert_eq!(loaded.best(), Some(100));
    }

    #[wasm_bindgen_test]
    fn garbage_in_storage_loads_empty() {
        LocalStorage::raw()
            .set_item(Leaderboard::KEY, "{oops")
            .unwrap();

        let loaded = load_leaderboard();
        LocalStorage::delete(Leaderboard::KEY);

        assert!(loaded.is_empty());
    }

    #[wasm_bindgen_test]
    fn missing_key_loads_empty() {
        LocalStorage::delete(Leaderboard::KEY);

        assert!(load_leaderboard().is_empty());
    }
}
