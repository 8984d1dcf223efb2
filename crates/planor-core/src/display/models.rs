//! Display implementations for domain models.
//!
//! All output is markdown so the terminal renderer can style it.

use std::fmt;

use rust_decimal::Decimal;

use super::{datetime::LocalDateTime, money::Percent, Money};
use crate::models::{
    Challenge, ChallengeStatus, ChallengeSummary, DepositStatus, Direction, EnrichedChallenge,
    EntryType, LedgerEntry, Simulation,
};

impl fmt::Display for ChallengeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DepositStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Challenge {
    fn fmt_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        if self.effective_custom_amounts().is_some() {
            writeln!(f, "- Schedule: custom amounts over {} weeks", self.total_weeks)?;
        } else {
            writeln!(
                f,
                "- Schedule: {} + {} per week over {} weeks ({})",
                Money(&self.start_amount),
                Money(&self.step_amount),
                self.total_weeks,
                self.direction
            )?;
        }
        writeln!(f, "- Started: {}", self.start_date)?;
        writeln!(f, "- Week: {} of {}", self.current_week, self.total_weeks)?;
        writeln!(f, "- Deposited: {}", Money(&self.total_deposited))?;
        if let Some(goal) = &self.target_amount {
            writeln!(f, "- Goal: {}", Money(goal))?;
        }
        Ok(())
    }

    fn fmt_footer(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(completed_at) = &self.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed_at))?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if self.deposit_history.is_empty() {
            writeln!(f, "\nNo deposits recorded.")?;
            return Ok(());
        }

        writeln!(f, "\n## Deposits")?;
        writeln!(f)?;
        writeln!(f, "| Week | Date | Status | Amount |")?;
        writeln!(f, "|-----:|------|--------|-------:|")?;
        let mut deposits: Vec<_> = self.deposit_history.iter().collect();
        deposits.sort_by_key(|deposit| deposit.week);
        for deposit in deposits {
            writeln!(
                f,
                "| {} | {} | {} | {} |",
                deposit.week,
                deposit.date,
                deposit.status,
                Money(&deposit.amount)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_header(f)?;
        self.fmt_footer(f)
    }
}

impl fmt::Display for EnrichedChallenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let challenge = &self.challenge;
        challenge.fmt_header(f)?;

        writeln!(
            f,
            "- Progress: {} of {} ({})",
            Money(&challenge.total_deposited),
            Money(&self.target_total),
            Percent(&self.progress_percent)
        )?;
        writeln!(f, "- Remaining: {}", Money(&self.remaining_amount))?;
        if let Some(goal_percent) = &self.goal_percent {
            writeln!(f, "- Goal progress: {}", Percent(goal_percent))?;
        }
        if !challenge.is_completed() && self.weeks_remaining > 0 {
            writeln!(
                f,
                "- Next deposit: {} (week {})",
                Money(&self.current_week_amount),
                challenge.current_week + 1
            )?;
        }
        writeln!(f, "- Weeks remaining: {}", self.weeks_remaining)?;
        if let Some(projected) = &self.projected_completion {
            writeln!(f, "- Projected completion: {projected}")?;
        }
        if !self.achieved_milestones.is_empty() {
            let reached: Vec<String> = self
                .achieved_milestones
                .iter()
                .map(|mark| format!("{mark}%"))
                .collect();
            writeln!(f, "- Milestones: {}", reached.join(", "))?;
        }

        challenge.fmt_footer(f)
    }
}

impl fmt::Display for ChallengeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({}/{})",
            self.title, self.id, self.current_week, self.total_weeks
        )?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {}", self.status.with_icon())?;
        writeln!(
            f,
            "- **Deposited**: {} of {} ({})",
            Money(&self.total_deposited),
            Money(&self.target_total),
            Percent(&self.progress_percent)
        )?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Simulation")?;
        writeln!(f)?;
        writeln!(f, "- Weeks: {}", self.weekly_amounts.len())?;
        writeln!(f, "- Target total: {}", Money(&self.target_total))?;
        writeln!(f, "- First week: {}", Money(&self.first_week_amount))?;
        writeln!(f, "- Last week: {}", Money(&self.last_week_amount))?;

        if self.weekly_amounts.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "| Week | Amount | Running total |")?;
        writeln!(f, "|-----:|-------:|--------------:|")?;
        let mut running = Decimal::ZERO;
        for (index, amount) in self.weekly_amounts.iter().enumerate() {
            running = running.saturating_add(*amount);
            writeln!(
                f,
                "| {} | {} | {} |",
                index + 1,
                Money(amount),
                Money(&running)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = &self.entry;
        writeln!(
            f,
            "- {} **{}** {} [{}] {} (account: {}, ID: {})",
            entry.date,
            entry.entry_type,
            Money(&entry.amount),
            entry.category,
            entry.description,
            entry.account_id,
            self.id
        )
    }
}
