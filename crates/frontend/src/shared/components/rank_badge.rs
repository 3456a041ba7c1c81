use crate::shared::number_format::format_usd;
use leptos::prelude::*;

/// Медаль за позицию в отсортированном по убыванию списке
///
/// Чисто отображаемое свойство позиции, не хранимое состояние.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeRank {
    Gold,
    Silver,
    Bronze,
    Plain,
}

/// Ранг для позиции: 0/1/2 получают медали, дальше — обычный бейдж
pub fn badge_rank(index: usize) -> BadgeRank {
    match index {
        0 => BadgeRank::Gold,
        1 => BadgeRank::Silver,
        2 => BadgeRank::Bronze,
        _ => BadgeRank::Plain,
    }
}

impl BadgeRank {
    pub fn medal(&self) -> &'static str {
        match self {
            BadgeRank::Gold => "🥇",
            BadgeRank::Silver => "🥈",
            BadgeRank::Bronze => "🥉",
            BadgeRank::Plain => "",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            BadgeRank::Gold => "badge badge--gold",
            BadgeRank::Silver => "badge badge--silver",
            BadgeRank::Bronze => "badge badge--bronze",
            BadgeRank::Plain => "badge badge--neutral",
        }
    }
}

/// Бейдж строки таблицы: медаль (для топ-3) и сумма
#[component]
pub fn RankBadge(
    /// Position in the rendered (sorted) list
    index: usize,
    /// Row revenue in dollars
    value: f64,
) -> impl IntoView {
    let rank = badge_rank(index);
    let label = if rank.medal().is_empty() {
        format_usd(value)
    } else {
        format!("{} {}", rank.medal(), format_usd(value))
    };

    view! { <span class=rank.class()>{label}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_three_get_medals() {
        // список из 5 позиций: 0,1,2 — медали, 3,4 — обычный бейдж
        let ranks: Vec<BadgeRank> = (0..5).map(badge_rank).collect();
        assert_eq!(
            ranks,
            vec![
                BadgeRank::Gold,
                BadgeRank::Silver,
                BadgeRank::Bronze,
                BadgeRank::Plain,
                BadgeRank::Plain,
            ]
        );
    }

    #[test]
    fn test_plain_has_no_medal() {
        assert_eq!(badge_rank(3).medal(), "");
        assert_eq!(badge_rank(0).medal(), "🥇");
    }
}
