use tracing::debug;
use wager_types::money::round2;
use wager_types::{BetRecord, CalendarDate};

use crate::chronology::DatedRecord;

/// Differences below half a cent are not reported.
const DRIFT_TOLERANCE: f64 = 0.005;

/// A dated record carrying its own and the running profit/loss.
#[derive(Clone, Debug, PartialEq)]
pub struct AccumulatedRecord {
    pub date: CalendarDate,
    pub source_index: usize,
    pub record: BetRecord,
    pub profit_loss: f64,
    pub cumulative_profit: f64,
}

/// Walk the sorted records once, computing the running profit total.
///
/// The total is rounded to cents after every addition. A hand-entered
/// `cumulative_profit` on the source record is ignored; disagreement with
/// the recomputed value is only logged.
pub fn accumulate(sorted: Vec<DatedRecord>) -> Vec<AccumulatedRecord> {
    let mut running = 0.0;
    let accumulated: Vec<AccumulatedRecord> = sorted
        .into_iter()
        .map(|dated| {
            let profit_loss = dated.record.profit_loss();
            running = round2(running + profit_loss);

            if let Some(supplied) = dated.record.supplied_cumulative_profit {
                if (supplied - running).abs() >= DRIFT_TOLERANCE {
                    debug!(
                        index = dated.source_index,
                        supplied,
                        recomputed = running,
                        "supplied cumulative profit overridden"
                    );
                }
            }

            AccumulatedRecord {
                date: dated.date,
                source_index: dated.source_index,
                record: dated.record,
                profit_loss,
                cumulative_profit: running,
            }
        })
        .collect();

    debug!(count = accumulated.len(), final_total = running, "cumulative profit computed");
    accumulated
}
