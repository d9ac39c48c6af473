//! Standard weekly timetable and grid view.
//!
//! The teaching week is Monday to Friday with six fixed blocks per day.
//! Courses may still prefer arbitrary slots; the blocks only drive the
//! grid view and the default slot catalog.
//!
//! # Business Hours
//! Teaching happens between 08:00 and 19:00. Generated candidate slots
//! start on a 15-minute grid and must end before 19:00.

use std::fmt;

use crate::models::{
    ClockTime, Day, ScheduleEntry, ScheduleResult, TimeError, TimeSlot, TimeWindow,
};

/// Opening hour of the teaching day.
pub const DAY_START_HOUR: u16 = 8;
/// Hour at which the teaching day closes (exclusive).
pub const DAY_END_HOUR: u16 = 19;
/// Step between generated candidate start times (minutes).
pub const SLOT_STEP_MINUTES: u16 = 15;

const fn block(sh: u16, sm: u16, eh: u16, em: u16) -> TimeWindow {
    TimeWindow {
        start: ClockTime::hm(sh, sm),
        end: ClockTime::hm(eh, em),
    }
}

/// The six standard teaching blocks of a day.
pub const STANDARD_TIME_SLOTS: [TimeWindow; 6] = [
    block(8, 0, 9, 30),
    block(9, 45, 11, 15),
    block(11, 30, 13, 0),
    block(13, 15, 14, 45),
    block(15, 0, 16, 30),
    block(16, 45, 18, 15),
];

/// Every standard block on every teaching day, Monday first.
pub fn standard_week() -> Vec<TimeSlot> {
    Day::ALL
        .iter()
        .flat_map(|&day| {
            STANDARD_TIME_SLOTS.iter().map(move |w| TimeSlot {
                day,
                start_time: w.start,
                end_time: w.end,
            })
        })
        .collect()
}

/// Whether `time` falls within teaching hours (08:00 inclusive to 19:00 exclusive).
pub fn is_business_hours(time: ClockTime) -> bool {
    (DAY_START_HOUR..DAY_END_HOUR).contains(&time.hour())
}

/// Candidate windows of `duration_minutes` within a teaching day.
///
/// Starts run from 08:00 in 15-minute steps while the start hour is
/// before 19; a window is kept when its end hour is also before 19.
/// A zero duration yields no windows.
///
/// ```
/// use u_timetable::timetable::generate_time_slots;
///
/// let windows = generate_time_slots(90);
/// assert_eq!(windows.first().unwrap().start.to_string(), "08:00");
/// assert_eq!(windows.last().unwrap().end.to_string(), "18:45");
/// ```
pub fn generate_time_slots(duration_minutes: u32) -> Vec<TimeWindow> {
    if duration_minutes == 0 {
        return Vec::new();
    }

    let day_end = u32::from(DAY_END_HOUR) * 60;
    let mut windows = Vec::new();
    let mut start = u32::from(DAY_START_HOUR) * 60;

    while start < day_end {
        let end = start + duration_minutes;
        if end / 60 < u32::from(DAY_END_HOUR) {
            // Both bounds are before 19:00, so they convert
            if let (Ok(s), Ok(e)) = (to_clock(start), to_clock(end)) {
                windows.push(TimeWindow::new(s, e));
            }
        }
        start += u32::from(SLOT_STEP_MINUTES);
    }

    windows
}

fn to_clock(minutes: u32) -> Result<ClockTime, TimeError> {
    let minutes =
        u16::try_from(minutes).map_err(|_| TimeError::OutOfRange(minutes.to_string()))?;
    ClockTime::from_minutes(minutes)
}

/// One row of a [`WeeklyGrid`]: a block and its entry per day.
#[derive(Debug, Clone)]
pub struct GridRow<'a> {
    /// The block this row covers.
    pub block: TimeWindow,
    /// Entry per day, indexed in `Day::ALL` order.
    pub cells: [Option<&'a ScheduleEntry>; 5],
}

/// Day-by-block view over a schedule.
///
/// A cell shows the first entry (in schedule order) on that day whose
/// start time equals the block start. Entries starting off the block
/// grid are not shown; see [`WeeklyGrid::off_grid`].
#[derive(Debug, Clone)]
pub struct WeeklyGrid<'a> {
    rows: Vec<GridRow<'a>>,
    off_grid: Vec<&'a ScheduleEntry>,
}

impl<'a> WeeklyGrid<'a> {
    /// Builds a grid over the standard blocks.
    pub fn standard(result: &'a ScheduleResult) -> Self {
        Self::with_blocks(result, &STANDARD_TIME_SLOTS)
    }

    /// Builds a grid over custom blocks.
    pub fn with_blocks(result: &'a ScheduleResult, blocks: &[TimeWindow]) -> Self {
        let rows = blocks
            .iter()
            .map(|&block| GridRow {
                block,
                cells: Day::ALL.map(|day| result.entry_at(day, block.start)),
            })
            .collect();

        let off_grid = result
            .schedule
            .iter()
            .filter(|e| !blocks.iter().any(|b| b.start == e.time_slot.start_time))
            .collect();

        Self { rows, off_grid }
    }

    /// Rows in block order.
    pub fn rows(&self) -> &[GridRow<'a>] {
        &self.rows
    }

    /// Entry shown at (`day`, block starting at `start`).
    pub fn cell(&self, day: Day, start: ClockTime) -> Option<&'a ScheduleEntry> {
        let col = Day::ALL.iter().position(|&d| d == day)?;
        self.rows
            .iter()
            .find(|r| r.block.start == start)
            .and_then(|r| r.cells[col])
    }

    /// Entries whose start does not line up with any block.
    pub fn off_grid(&self) -> &[&'a ScheduleEntry] {
        &self.off_grid
    }
}

impl fmt::Display for WeeklyGrid<'_> {
    /// Plain-text table: one line per block, `code @ room (instructor)` per cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<11}", "Time")?;
        for day in Day::ALL {
            write!(f, " | {day:<28}")?;
        }
        writeln!(f)?;

        for row in &self.rows {
            write!(f, "{:<11}", format!("{}-{}", row.block.start, row.block.end))?;
            for cell in &row.cells {
                let text = cell
                    .map(|e| {
                        format!(
                            "{} @ {} ({})",
                            e.course.code, e.classroom.name, e.course.instructor
                        )
                    })
                    .unwrap_or_default();
                write!(f, " | {text:<28}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
