use yew::prelude::*;

/// One counter card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct StatCard {
    pub label: &'static str,
    pub value: Option<u64>,
    pub tone: &'static str,
}

#[derive(Properties, PartialEq)]
pub(crate) struct StatsCardsProps {
    pub cards: Vec<StatCard>,
}

#[function_component(StatsCards)]
pub(crate) fn stats_cards(props: &StatsCardsProps) -> Html {
    html! {
        <div class="stats stats-vertical shadow md:stats-horizontal">
            {for props.cards.iter().map(|card| html! {
                <div class="stat">
                    <div class="stat-title">{card.label}</div>
                    <div class={classes!("stat-value", card.tone)}>
                        {card.value.map_or_else(|| "–".to_string(), |value| value.to_string())}
                    </div>
                </div>
            })}
        </div>
    }
}
