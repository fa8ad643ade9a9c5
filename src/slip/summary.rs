use super::BetSlip;
use crate::odds::compute_winnings;

impl BetSlip {
    /// Plain-text slip: one line per selection, then the totals
    pub fn summary(&self, currency: &str) -> String {
        let mut out = String::new();
        if self.is_empty() {
            out.push_str("Your betting slip is empty\n");
            return out;
        }

        for sel in self.iter() {
            let win = compute_winnings(sel.stake, sel.odds);
            out.push_str(&format!(
                "{:<32} {:>6}  stake {}{}  win {}{:.2}\n",
                sel.description,
                sel.odds.to_string(),
                currency,
                sel.stake,
                currency,
                win
            ));
        }

        let totals = self.totals();
        out.push_str(&format!("Total Stake: {}{:.2}\n", currency, totals.total_stake));
        out.push_str(&format!(
            "Potential Return: {}{:.2}\n",
            currency, totals.total_potential_return
        ));
        out
    }
}
