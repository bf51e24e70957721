//! Interface strings (headings, column labels) per display language.

use wager_types::Language;

pub struct Chrome {
    pub disclaimer: &'static str,
    pub title: &'static str,
    /// Joins the title to the author credit.
    pub by: &'static str,
    pub total_profit_loss: &'static str,
    pub roi: &'static str,
    pub win_rate: &'static str,
    pub total_bets: &'static str,
    pub cumulative_profit_evolution: &'static str,
    pub profit_loss_per_bet: &'static str,
    pub win_loss_distribution: &'static str,
    pub bet_types: &'static str,
    pub betting_history: &'static str,
    pub date: &'static str,
    pub fixture: &'static str,
    pub bet_type: &'static str,
    pub odds: &'static str,
    pub stake: &'static str,
    pub result: &'static str,
    pub profit_loss: &'static str,
    pub cumulative: &'static str,
    pub proof: &'static str,
    pub proof_missing: &'static str,
    pub wins: &'static str,
    pub losses: &'static str,
    pub not_applicable: &'static str,
    pub no_bets: &'static str,
    pub export_done: &'static str,
    pub export_failed: &'static str,
    pub hints: Hints,
}

/// One-line explanations shown under each section with `--explain`.
pub struct Hints {
    pub total_profit_loss: &'static str,
    pub roi: &'static str,
    pub win_rate: &'static str,
    pub total_bets: &'static str,
    pub cumulative_profit: &'static str,
    pub profit_loss_per_bet: &'static str,
    pub win_loss_distribution: &'static str,
    pub betting_history: &'static str,
}

static EN: Chrome = Chrome {
    disclaimer: "For entertainment only. Betting can be addictive; never bet more than you can afford to lose.",
    title: "Betting Performance Dashboard",
    by: "by",
    total_profit_loss: "Total Profit/Loss",
    roi: "ROI",
    win_rate: "Win Rate",
    total_bets: "Total Bets",
    cumulative_profit_evolution: "Cumulative Profit Evolution",
    profit_loss_per_bet: "Profit/Loss per Bet",
    win_loss_distribution: "Win/Loss Distribution",
    bet_types: "Bet Types",
    betting_history: "Betting History",
    date: "Date",
    fixture: "Match",
    bet_type: "Bet Type",
    odds: "Odds",
    stake: "Stake",
    result: "Result",
    profit_loss: "Profit/Loss",
    cumulative: "Cumulative",
    proof: "Proof",
    proof_missing: "image not found",
    wins: "Wins",
    losses: "Losses",
    not_applicable: "n/a",
    no_bets: "No bets recorded.",
    export_done: "Dashboard exported to",
    export_failed: "Export is unavailable here; the dashboard is unchanged.",
    hints: Hints {
        total_profit_loss: "Net sum of all returns minus all stakes. Positive means an overall profit.",
        roi: "Return on investment: (total returns - total stakes) / total stakes x 100%.",
        win_rate: "Share of bets that were won: wins / total bets x 100%.",
        total_bets: "Number of bets placed in this tracking period.",
        cumulative_profit: "Running profit/loss after each bet.",
        profit_loss_per_bet: "Profit or loss of each individual bet. Green for wins, red for losses.",
        win_loss_distribution: "Winning versus losing bets as a share of all bets placed.",
        betting_history: "Every bet placed with its odds, stake, result and running cumulative profit.",
    },
};

static FR: Chrome = Chrome {
    disclaimer: "Uniquement à des fins de divertissement. Les paris peuvent créer une dépendance ; ne pariez jamais plus que ce que vous pouvez perdre.",
    title: "Tableau de Bord des Paris",
    by: "par",
    total_profit_loss: "Profit/Perte Total",
    roi: "Retour sur Investissement",
    win_rate: "Taux de Réussite",
    total_bets: "Total des Paris",
    cumulative_profit_evolution: "Évolution du Profit Cumulé",
    profit_loss_per_bet: "Profit/Perte par Pari",
    win_loss_distribution: "Distribution Gains/Pertes",
    bet_types: "Types de Paris",
    betting_history: "Historique des Paris",
    date: "Date",
    fixture: "Match",
    bet_type: "Type de Pari",
    odds: "Cotes",
    stake: "Mise",
    result: "Résultat",
    profit_loss: "Profit/Perte",
    cumulative: "Cumulatif",
    proof: "Preuve",
    proof_missing: "image introuvable",
    wins: "Gains",
    losses: "Pertes",
    not_applicable: "n.d.",
    no_bets: "Aucun pari enregistré.",
    export_done: "Tableau de bord exporté vers",
    export_failed: "L'export n'est pas disponible ici ; le tableau de bord reste inchangé.",
    hints: Hints {
        total_profit_loss: "Somme nette des retours moins les mises. Un nombre positif indique un profit global.",
        roi: "Retour sur investissement : (retours totaux - mises totales) / mises totales x 100%.",
        win_rate: "Part des paris gagnés : gains / nombre total de paris x 100%.",
        total_bets: "Nombre de paris placés pendant cette période de suivi.",
        cumulative_profit: "Profit/perte cumulé après chaque pari.",
        profit_loss_per_bet: "Profit ou perte de chaque pari. Vert pour les gains, rouge pour les pertes.",
        win_loss_distribution: "Paris gagnants par rapport aux paris perdants, en part du total.",
        betting_history: "Chaque pari placé avec ses cotes, sa mise, son résultat et le profit cumulé.",
    },
};

impl Chrome {
    pub fn for_language(language: Language) -> &'static Chrome {
        match language {
            Language::En => &EN,
            Language::Fr => &FR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_follows_language() {
        assert_eq!(Chrome::for_language(Language::En).by, "by");
        assert_eq!(Chrome::for_language(Language::Fr).by, "par");
        assert!(Chrome::for_language(Language::Fr).hints.roi.starts_with("Retour"));
    }
}
