use rtimecard::core::fill::FillDefaults;
use rtimecard::core::{
    AlwaysConfirm, Confirm, EditorOptions, NoopNotifier, RowAccess, RowError,
    SubmitDecision, TimecardCalendar,
};
use rtimecard::models::{Calendar, DayRow, TimePreset, WorkType};
use rtimecard::utils::time::parse_time;

fn options(start: &str, end: &str, brk: u32) -> EditorOptions {
    EditorOptions {
        defaults: FillDefaults {
            start_time: parse_time(start),
            end_time: parse_time(end),
            break_minutes: brk,
        },
        on_fill_all: None,
    }
}

fn editor_for(rows: Vec<DayRow>, opts: EditorOptions) -> TimecardCalendar {
    TimecardCalendar::new(
        Calendar {
            month: "2025-10".into(),
            rows,
        },
        opts,
    )
}

struct CountingConfirm {
    asked: Vec<String>,
    answer: bool,
}

impl Confirm for CountingConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.answer
    }
}

#[test]
fn work_type_table_holds_for_every_code() {
    for wt in [
        WorkType::Attendance,
        WorkType::PaidLeave,
        WorkType::NoWork,
        WorkType::Unset,
    ] {
        let mut editor = editor_for(vec![DayRow::new(1, "月", false)], options("", "", 60));
        // Values typed before the work type changes
        let row = editor.row_mut(1).unwrap();
        row.start_time.value = parse_time("09:00");
        row.end_time.value = parse_time("18:00");
        row.break_minutes.value = 30;
        row.paid_leave.value = 1;
        editor.change_work_type(1, wt);
        let r = editor.row(1).unwrap();

        let times_on = wt == WorkType::Attendance;
        let paid_on = wt == WorkType::PaidLeave;
        assert_eq!(r.start_time.enabled, times_on, "{wt:?}");
        assert_eq!(r.end_time.enabled, times_on, "{wt:?}");
        assert_eq!(r.break_minutes.enabled, times_on, "{wt:?}");
        assert_eq!(r.paid_leave.enabled, paid_on, "{wt:?}");

        if times_on {
            assert_eq!(r.start_time.value, parse_time("09:00"));
            assert_eq!(r.break_minutes.value, 30);
        } else {
            assert_eq!(r.start_time.value, None);
            assert_eq!(r.end_time.value, None);
            assert_eq!(r.break_minutes.value, 0);
        }
        if paid_on {
            assert_eq!(r.paid_leave.value, 1);
        } else {
            assert_eq!(r.paid_leave.value, 0);
        }

        let snapshot = r.clone();
        editor.change_work_type(1, wt);
        assert_eq!(editor.row(1).unwrap(), &snapshot);
    }
}

#[test]
fn preset_makes_row_attendance() {
    let mut editor = editor_for(vec![DayRow::new(1, "月", false)], options("", "", 60));
    editor.change_work_type(1, WorkType::PaidLeave);
    let preset = TimePreset::new(
        "standard",
        parse_time("09:00").unwrap(),
        parse_time("18:00").unwrap(),
        60,
    );
    assert!(editor.select_preset(1, Some(&preset)));
    let r = editor.row(1).unwrap();
    assert_eq!(r.work_type, WorkType::Attendance);
    assert!(r.start_time.enabled && r.end_time.enabled && r.break_minutes.enabled);
    assert!(!r.paid_leave.enabled);
}

#[test]
fn empty_preset_selection_is_a_no_op() {
    let mut row = DayRow::new(1, "月", false);
    row.work_type = WorkType::Attendance;
    row.start_time.value = parse_time("08:00");
    let mut editor = editor_for(vec![row], options("", "", 60));
    let before = editor.row(1).unwrap().clone();
    assert!(!editor.select_preset(1, None));
    assert_eq!(editor.row(1).unwrap(), &before);
}

#[test]
fn fill_all_sets_saturday_to_no_work() {
    let mut row = DayRow::new(4, "土", false);
    row.work_type = WorkType::Attendance;
    row.start_time.value = parse_time("07:00");
    let mut editor = editor_for(vec![row], options("09:00", "18:00", 60));
    assert!(editor.fill_all(&mut AlwaysConfirm));
    let r = editor.row(4).unwrap();
    assert_eq!(r.work_type, WorkType::NoWork);
    assert_eq!(r.start_time.value, None);
    assert_eq!(r.end_time.value, None);
    assert_eq!(r.break_minutes.value, 0);
}

#[test]
fn fill_all_sets_wednesday_to_defaults() {
    let mut editor = editor_for(vec![DayRow::new(1, "水", false)], options("09:00", "18:00", 45));
    editor.fill_all(&mut AlwaysConfirm);
    let r = editor.row(1).unwrap();
    assert_eq!(r.work_type, WorkType::Attendance);
    assert_eq!(r.start_time.value, parse_time("09:00"));
    assert_eq!(r.end_time.value, parse_time("18:00"));
    assert_eq!(r.break_minutes.value, 45);
}

#[test]
fn fill_all_confirmation_mentions_registered_hook() {
    let mut plain = editor_for(vec![DayRow::new(1, "水", false)], options("", "", 60));
    let mut c = CountingConfirm {
        asked: Vec::new(),
        answer: false,
    };
    assert!(!plain.fill_all(&mut c));
    assert!(!c.asked[0].contains("自動選択"));
    assert_eq!(plain.row(1).unwrap().work_type, WorkType::Unset);

    let opts = options("", "", 60).with_fill_hook(Box::new(|_: &mut dyn RowAccess| {}));
    let mut hooked = editor_for(vec![DayRow::new(1, "水", false)], opts);
    hooked.fill_all(&mut c);
    assert!(c.asked[1].contains("自動選択"));
}

#[test]
fn fill_hook_runs_before_defaults() {
    let opts = options("09:00", "18:00", 60).with_fill_hook(Box::new(|row: &mut dyn RowAccess| {
        row.set_contract(Some("C-9".into()));
    }));
    let rows = vec![DayRow::new(1, "水", false).with_contract_selector()];
    let mut editor = editor_for(rows, opts);
    editor.fill_all(&mut AlwaysConfirm);
    let r = editor.row(1).unwrap();
    assert_eq!(r.contract.as_ref().unwrap().value.as_deref(), Some("C-9"));
    assert_eq!(r.work_type, WorkType::Attendance);
}

#[test]
fn inverted_range_blocks_until_next_day_flag() {
    let mut row = DayRow::new(7, "火", false);
    row.work_type = WorkType::Attendance;
    row.start_time.value = parse_time("18:00");
    row.end_time.value = parse_time("09:00");
    let mut editor = editor_for(vec![row], options("", "", 60));

    let result = editor.validate();
    assert_eq!(result.errors, vec![RowError::InvertedRange { day: 7 }]);
    assert_eq!(result.decision(), SubmitDecision::Prevent);

    editor.row_mut(7).unwrap().end_next_day = true;
    let result = editor.validate();
    assert!(result.errors.is_empty());
    assert_eq!(result.decision(), SubmitDecision::Proceed);
    assert!(!editor.row(7).unwrap().highlighted);
}

#[test]
fn cleared_calendar_always_validates() {
    let cal = Calendar::for_month(2025, 10, &[13], true).unwrap();
    let mut editor = TimecardCalendar::new(cal, options("18:00", "09:00", 60));
    editor.fill_all(&mut AlwaysConfirm);
    assert!(!editor.validate().is_valid());
    assert!(editor.clear_all(&mut AlwaysConfirm, &mut NoopNotifier));
    assert!(editor.validate().is_valid());
}
