// movprobe-core/tests/timecode_tests.rs
//
// Properties of the timecode codec over whole ranges of frames.

use movprobe_core::Timecode;

/// Every (base, drop) pair the frame-rate table can produce.
const FORMATS: [(u32, bool); 3] = [(24, false), (30, false), (30, true)];

fn is_dropped_code(m: u32, s: u32, f: u32) -> bool {
    s == 0 && f < 2 && m % 10 != 0
}

#[test]
fn test_round_trip_sampled_codes() {
    for (base, drop) in FORMATS {
        let separator = if drop { ';' } else { ':' };
        for h in [0, 1, 9, 13, 23] {
            for m in 0..60 {
                for s in [0, 1, 29, 59] {
                    for f in 0..base {
                        if drop && is_dropped_code(m, s, f) {
                            continue;
                        }
                        let code = format!("{h:02}:{m:02}:{s:02}{separator}{f:02}");
                        let tc = Timecode::parse(&code, base, drop).unwrap();
                        assert_eq!(tc.format(), code, "base {base} drop {drop}");
                    }
                }
            }
        }
    }
}

#[test]
fn test_drop_frame_skips_codes_at_minute_rollover() {
    let mut tc = Timecode::parse("00:00:00;00", 30, true).unwrap();
    let mut previous = tc.format();
    // just over an hour of frames
    for _ in 0..108_000 {
        tc.add(1);
        let current = tc.format();
        let (prev_min, cur_min) = (&previous[3..5], &current[3..5]);
        if prev_min != cur_min {
            let minute: u32 = cur_min.parse().unwrap();
            let expected = if minute % 10 == 0 { "00" } else { "02" };
            assert_eq!(&current[6..], &format!("00;{expected}"), "after {previous}");
        }
        previous = current;
    }
}

#[test]
fn test_drop_frame_is_monotonic() {
    let mut tc = Timecode::parse("00:58:00;00", 30, true).unwrap();
    let mut previous = tc.format();
    for _ in 0..20_000 {
        tc.add(1);
        let current = tc.format();
        assert!(current > previous, "{current} after {previous}");
        previous = current;
    }
}

#[test]
fn test_add_is_additive() {
    for (base, drop) in FORMATS {
        let start = if drop { "09:59:58;12" } else { "09:59:58:12" };
        for (a, b) in [(0, 0), (1, 1), (17, 1781), (17_982, 3), (1_000_000, 12_345)] {
            let mut split = Timecode::parse(start, base, drop).unwrap();
            split.add(a);
            split.add(b);

            let mut single = Timecode::parse(start, base, drop).unwrap();
            single.add(a + b);

            assert_eq!(split.format(), single.format(), "base {base} drop {drop} a {a} b {b}");
        }
    }
}

#[test]
fn test_frame_count_tracks_adds() {
    let mut tc = Timecode::parse("00:00:10:00", 24, false).unwrap();
    assert_eq!(tc.frame_count(), 240);
    tc.add(101);
    assert_eq!(tc.frame_count(), 341);
    assert_eq!(tc.to_string(), "00:00:14:05");
}
