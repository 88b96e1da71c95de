#[cfg(test)]
mod tests {
    use smart_earner_dashboard::hooks::FetchState;
    use smart_earner_dashboard::models::{
        earnings::{IncentiveRow, NudgeList, TodayLive},
        error::AppError,
        forecast::Forecast,
        heatmap::{HeatWeight, HeatmapGrid, HeatmapQuery},
        offer::{Offer, OfferGrade, OfferStatus},
        schedule::{Block, BlockKind, ScheduleEditor, SchedulePlan},
    };
    use chrono::NaiveDate;
    use std::rc::Rc;

    // Helper: the canonical evening plan (pre-peak drive, short break,
    // dinner-peak drive).
    fn sample_plan() -> SchedulePlan {
        SchedulePlan {
            day: NaiveDate::from_ymd_opt(2025, 10, 4).unwrap(),
            blocks: vec![
                Block::Drive {
                    start: 16 * 60,
                    end: 18 * 60,
                    reason: "dinner pre-peak".to_string(),
                    est_eph: 24.5,
                },
                Block::Break {
                    start: 18 * 60,
                    end: 18 * 60 + 15,
                    nearby: vec![],
                },
                Block::Drive {
                    start: 18 * 60 + 15,
                    end: 20 * 60 + 10,
                    reason: "dinner peak".to_string(),
                    est_eph: 29.1,
                },
            ],
        }
    }

    fn open_editor(plan: SchedulePlan) -> ScheduleEditor {
        let mut editor = ScheduleEditor::new();
        editor.load_plan(plan);
        editor
    }

    fn assert_non_overlapping(plan: &SchedulePlan) {
        for pair in plan.blocks.windows(2) {
            assert!(
                pair[0].end() <= pair[1].start(),
                "blocks overlap: {}..{} then {}..{}",
                pair[0].start(),
                pair[0].end(),
                pair[1].start(),
                pair[1].end()
            );
        }
    }

    // ===== Schedule Editor Tests =====

    #[test]
    fn test_shorten_drive_reflows_following_break() {
        // Editing block 0's end to 17:30 must move the break's start to
        // 17:30, leave its end at 18:15, and leave the last drive alone.
        let mut editor = open_editor(sample_plan());

        editor.begin_edit(0);
        editor.set_edit_end(Some(17 * 60 + 30));
        assert!(editor.edit().unwrap().error().is_none());
        assert!(editor.commit_edit());

        let blocks = &editor.working_plan().unwrap().blocks;
        assert_eq!(blocks[0].end(), 17 * 60 + 30);
        assert_eq!(blocks[1].start(), 17 * 60 + 30);
        assert_eq!(blocks[1].end(), 18 * 60 + 15);
        assert_eq!(blocks[2].start(), 18 * 60 + 15);
        assert_eq!(blocks[2].end(), 20 * 60 + 10);
        assert_non_overlapping(editor.working_plan().unwrap());
    }

    #[test]
    fn test_reflow_insufficient_slack_pushes_next_block() {
        // The break takes its 10-minute floor and the following drive's
        // start slides forward.
        let plan = SchedulePlan {
            day: NaiveDate::from_ymd_opt(2025, 10, 4).unwrap(),
            blocks: vec![
                Block::Drive {
                    start: 16 * 60,
                    end: 17 * 60,
                    reason: "warmup".to_string(),
                    est_eph: 20.0,
                },
                Block::Break {
                    start: 17 * 60,
                    end: 17 * 60 + 15,
                    nearby: vec![],
                },
                Block::Drive {
                    start: 17 * 60 + 15,
                    end: 19 * 60 + 10,
                    reason: "peak".to_string(),
                    est_eph: 28.0,
                },
            ],
        };
        let mut editor = open_editor(plan);

        editor.begin_edit(0);
        editor.set_edit_end(Some(17 * 60 + 10));
        assert!(editor.commit_edit());

        let blocks = &editor.working_plan().unwrap().blocks;
        assert_eq!(blocks[1].start(), 17 * 60 + 10);
        assert_eq!(blocks[1].end(), 17 * 60 + 20);
        assert_eq!(blocks[1].duration(), 10);
        assert_eq!(blocks[2].start(), 17 * 60 + 20);
        assert_non_overlapping(editor.working_plan().unwrap());
    }

    #[test]
    fn test_reflow_preceding_break_pulls_start_back() {
        // Moving the last drive earlier squeezes the break below its floor;
        // the break start is pulled back and the first drive's end follows.
        let mut editor = open_editor(sample_plan());

        editor.begin_edit(2);
        editor.set_edit_start(Some(18 * 60 + 5));
        editor.set_edit_end(Some(20 * 60));
        assert!(editor.edit().unwrap().error().is_none());
        assert!(editor.commit_edit());

        let blocks = &editor.working_plan().unwrap().blocks;
        assert_eq!(blocks[2].start(), 18 * 60 + 5);
        assert_eq!(blocks[2].end(), 20 * 60);
        assert_eq!(blocks[1].end(), 18 * 60 + 5);
        assert_eq!(blocks[1].start(), 17 * 60 + 55);
        assert_eq!(blocks[1].duration(), 10);
        assert_eq!(blocks[0].end(), 17 * 60 + 55);
        assert_non_overlapping(editor.working_plan().unwrap());
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let mut editor = open_editor(sample_plan());

        editor.begin_edit(0);
        editor.set_edit_end(Some(15 * 60));
        assert_eq!(
            editor.edit().unwrap().error(),
            Some("End time must be after start time")
        );

        // Commit must be a no-op while invalid
        assert!(!editor.commit_edit());
        assert_eq!(editor.working_plan().unwrap(), &sample_plan());
        assert!(editor.edit().is_some());
    }

    #[test]
    fn test_drive_duration_cap() {
        let mut editor = open_editor(sample_plan());

        editor.begin_edit(0);
        editor.set_edit_end(Some(18 * 60 + 30)); // 150 minutes
        assert_eq!(
            editor.edit().unwrap().error(),
            Some("Drive blocks cannot exceed 120 minutes")
        );
        assert!(!editor.commit_edit());
        assert_eq!(editor.working_plan().unwrap(), &sample_plan());
    }

    #[test]
    fn test_break_duration_floor_in_edit() {
        let mut editor = open_editor(sample_plan());

        editor.begin_edit(1);
        editor.set_edit_end(Some(18 * 60 + 5)); // 5 minutes
        assert_eq!(
            editor.edit().unwrap().error(),
            Some("Break duration must be at least 10 minutes")
        );
        assert!(!editor.commit_edit());
    }

    #[test]
    fn test_incomplete_edit_is_not_an_error_but_not_committable() {
        let mut editor = open_editor(sample_plan());

        editor.begin_edit(0);
        editor.set_edit_end(None);
        assert!(editor.edit().unwrap().error().is_none());
        assert!(!editor.commit_edit());
        assert_eq!(editor.working_plan().unwrap(), &sample_plan());
    }

    #[test]
    fn test_begin_edit_surfaces_preexisting_bad_data() {
        // Load trusts upstream, but entering edit mode validates the seeded
        // values immediately.
        let plan = SchedulePlan {
            day: NaiveDate::from_ymd_opt(2025, 10, 4).unwrap(),
            blocks: vec![Block::Drive {
                start: 16 * 60,
                end: 18 * 60 + 10, // 130 minutes
                reason: "too long".to_string(),
                est_eph: 22.0,
            }],
        };
        let mut editor = open_editor(plan);
        assert!(editor.plan_errors().is_empty());

        editor.begin_edit(0);
        assert_eq!(
            editor.edit().unwrap().error(),
            Some("Drive blocks cannot exceed 120 minutes")
        );
    }

    #[test]
    fn test_cancel_edit_keeps_working_copy() {
        let mut editor = open_editor(sample_plan());

        editor.begin_edit(0);
        editor.set_edit_end(Some(17 * 60));
        editor.cancel_edit();

        assert!(editor.edit().is_none());
        assert_eq!(editor.working_plan().unwrap(), &sample_plan());
    }

    #[test]
    fn test_accept_rejects_overlapping_blocks() {
        let mut editor = ScheduleEditor::new();
        editor.load_plan(sample_plan());
        editor.accept().unwrap();
        let accepted = editor.accepted_plan().unwrap().clone();

        let overlapping = SchedulePlan {
            day: NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
            blocks: vec![
                Block::Drive {
                    start: 16 * 60,
                    end: 18 * 60,
                    reason: "a".to_string(),
                    est_eph: 20.0,
                },
                Block::Drive {
                    start: 17 * 60 + 50,
                    end: 19 * 60,
                    reason: "b".to_string(),
                    est_eph: 20.0,
                },
            ],
        };
        editor.load_plan(overlapping);

        let errors = editor.accept().unwrap_err();
        assert_eq!(errors.get(&0).map(String::as_str), Some("Blocks cannot overlap"));
        // The previously accepted plan is untouched and the session stays open
        assert_eq!(editor.accepted_plan(), Some(&accepted));
        assert!(editor.is_open());
    }

    #[test]
    fn test_accept_revalidates_duration_limits() {
        // The stricter accept policy: duration caps are re-checked even
        // though load trusted the plan.
        let plan = SchedulePlan {
            day: NaiveDate::from_ymd_opt(2025, 10, 4).unwrap(),
            blocks: vec![Block::Drive {
                start: 16 * 60,
                end: 18 * 60 + 10,
                reason: "too long".to_string(),
                est_eph: 22.0,
            }],
        };
        let mut editor = open_editor(plan);

        let errors = editor.accept().unwrap_err();
        assert_eq!(
            errors.get(&0).map(String::as_str),
            Some("Drive blocks cannot exceed 120 minutes")
        );
        assert!(editor.accepted_plan().is_none());
    }

    #[test]
    fn test_close_reverts_to_accepted_plan() {
        let mut editor = ScheduleEditor::new();
        editor.load_plan(sample_plan());
        editor.accept().unwrap();
        assert!(!editor.is_open());

        // Re-open, mutate, discard
        editor.load_plan(editor.accepted_plan().unwrap().clone());
        editor.begin_edit(0);
        editor.set_edit_end(Some(17 * 60 + 30));
        assert!(editor.commit_edit());
        assert!(editor.has_local_changes());

        editor.close();
        assert!(!editor.is_open());
        assert_eq!(editor.accepted_plan(), Some(&sample_plan()));
    }

    #[test]
    fn test_accepted_edit_sequence_preserves_non_overlap() {
        let mut editor = open_editor(sample_plan());

        editor.begin_edit(0);
        editor.set_edit_end(Some(17 * 60 + 30));
        assert!(editor.commit_edit());

        editor.begin_edit(2);
        editor.set_edit_start(Some(18 * 60 + 30));
        assert!(editor.commit_edit());

        assert_non_overlapping(editor.working_plan().unwrap());
        editor.accept().unwrap();
        assert_non_overlapping(editor.accepted_plan().unwrap());
    }

    #[test]
    fn test_only_break_blocks_are_removable() {
        let mut editor = open_editor(sample_plan());

        assert!(!editor.remove_block(0)); // drive
        assert_eq!(editor.working_plan().unwrap().blocks.len(), 3);

        assert!(editor.remove_block(1)); // break
        let blocks = &editor.working_plan().unwrap().blocks;
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].kind(), BlockKind::Drive);
        assert_eq!(blocks[1].kind(), BlockKind::Drive);
    }

    #[test]
    fn test_reflow_marker_set_and_cleared_on_load() {
        let mut editor = open_editor(sample_plan());

        editor.begin_edit(0);
        editor.set_edit_end(Some(17 * 60 + 30));
        assert!(editor.commit_edit());
        assert!(editor.is_reflowed(1));
        assert!(!editor.is_reflowed(0));

        editor.load_plan(sample_plan());
        assert!(!editor.is_reflowed(1));
    }

    #[test]
    fn test_current_block_index() {
        let plan = sample_plan();
        assert_eq!(plan.current_block_index(16 * 60 + 30), Some(0));
        assert_eq!(plan.current_block_index(18 * 60 + 5), Some(1));
        // Before the plan starts, the first block counts as current
        assert_eq!(plan.current_block_index(9 * 60), Some(0));
        // After the last block nothing is current
        assert_eq!(plan.current_block_index(21 * 60), None);
    }

    #[test]
    fn test_block_deserialization_from_wire_shape() {
        let json = r#"{
            "type": "break",
            "start": "18:00",
            "end": "18:15",
            "nearby": [{"name": "Cafe Azul", "dist_km": 0.6}]
        }"#;

        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.kind(), BlockKind::Break);
        assert_eq!(block.start(), 18 * 60);
        assert_eq!(block.end(), 18 * 60 + 15);
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");

        let error = AppError::StatusError {
            status: 404,
            body: "offer_not_found".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP 404: offer_not_found");
    }

    // ===== Offer Model Tests =====

    fn offer_json() -> &'static str {
        r#"{
            "offer_id": "offer_482913",
            "driver_id": "d42",
            "status": "pending",
            "ttl_seconds": 25,
            "candidate": {
                "rider_id": "r4821",
                "rider_rating": 4.87,
                "driver_id": "d42",
                "city_id": 1,
                "request_time": "2025-10-04T17:00:00Z",
                "product": null,
                "driver_lat": 52.3702,
                "driver_lon": 4.8952,
                "pickup_lat": 52.3811,
                "pickup_lon": 4.9041,
                "drop_lat": 52.3599,
                "drop_lon": 4.8721,
                "est_distance_km": 6.4,
                "est_duration_mins": 21
            },
            "rating": {
                "overall": 78.4,
                "breakdown": {
                    "profitability": 82.0,
                    "time": 74.0,
                    "pickup": 88.0,
                    "traffic": 61.0,
                    "customer": 70.0
                },
                "reasons": {
                    "profitability": "€14.20 est vs €11.00 median x1.3 surge",
                    "time": "21 min fits the hour",
                    "pickup": "Short pickup (0.6 km)",
                    "traffic": "Moderate congestion",
                    "customer": "Rider rated 4.87"
                },
                "anchors_used": {}
            }
        }"#
    }

    #[test]
    fn test_offer_deserialization() {
        let offer: Offer = serde_json::from_str(offer_json()).unwrap();
        assert_eq!(offer.offer_id, "offer_482913");
        assert_eq!(offer.status, OfferStatus::Pending);
        assert_eq!(offer.ttl_seconds, 25);
        assert_eq!(offer.candidate.rider_rating, Some(4.87));
        assert_eq!(offer.rating.breakdown.pickup, 88.0);
        assert!(!offer.rating.has_anchors());
    }

    #[test]
    fn test_offer_countdown_progress() {
        let offer: Offer = serde_json::from_str(offer_json()).unwrap();
        assert_eq!(offer.countdown_progress(25), 1.0);
        assert_eq!(offer.countdown_progress(5), 0.2);
        assert_eq!(offer.countdown_progress(0), 0.0);

        let mut accepted = offer;
        accepted.status = OfferStatus::Accepted;
        assert_eq!(accepted.countdown_progress(10), 0.0);
    }

    #[test]
    fn test_offer_grade_thresholds() {
        assert_eq!(OfferGrade::from_overall(91.0), OfferGrade::Excellent);
        assert_eq!(OfferGrade::from_overall(85.0), OfferGrade::Excellent);
        assert_eq!(OfferGrade::from_overall(84.9), OfferGrade::Good);
        assert_eq!(OfferGrade::from_overall(70.0), OfferGrade::Good);
        assert_eq!(OfferGrade::from_overall(55.0), OfferGrade::Fair);
        assert_eq!(OfferGrade::from_overall(10.0), OfferGrade::Poor);
        assert_eq!(OfferGrade::from_overall(54.9).label(), "Poor");
    }

    // ===== Forecast Model Tests =====

    #[test]
    fn test_forecast_series_data_sorted_by_hour() {
        let json = r#"{
            "city_id": 3,
            "city_name": "Rotterdam",
            "dow": 6,
            "forecast": [
                {"hour": 18, "trips": 140, "eph": 27.1},
                {"hour": 17, "trips": 120, "eph": 24.3},
                {"hour": 19, "trips": null, "eph": 25.0}
            ],
            "current_surge": 1.4
        }"#;

        let forecast: Forecast = serde_json::from_str(json).unwrap();
        let (x_data, y_data) = forecast.series_data();

        assert_eq!(x_data, vec!["17:00", "18:00", "19:00"]);
        assert_eq!(y_data, vec![24.3, 27.1, 25.0]);
        assert_eq!(forecast.peak().unwrap().hour, 18);
        assert_eq!(forecast.surge_label(), "x1.40");
    }

    #[test]
    fn test_forecast_without_surge() {
        let json = r#"{"city_id": 1, "city_name": "Amsterdam", "dow": 0, "forecast": []}"#;
        let forecast: Forecast = serde_json::from_str(json).unwrap();
        assert_eq!(forecast.surge_label(), "—");
        assert!(forecast.peak().is_none());
    }

    // ===== Heatmap Model Tests =====

    #[test]
    fn test_heatmap_grid_deserialization() {
        let json = r#"{
            "center": [51.9244, 4.4777],
            "when_local": "2025-10-04T17:00:00+02:00",
            "radius_km": 3.0,
            "weight": "count",
            "count": 1,
            "cells": [{
                "h3": "88196953b3fffff",
                "value": 0.72,
                "center": [51.92, 4.47],
                "boundary": [[51.91, 4.46], [51.93, 4.46], [51.93, 4.48]]
            }]
        }"#;

        let grid: HeatmapGrid = serde_json::from_str(json).unwrap();
        assert_eq!(grid.count, 1);
        assert_eq!(grid.weight, HeatWeight::Count);
        assert_eq!(grid.cells[0].boundary.len(), 3);
        assert_eq!(grid.cells[0].tooltip(), "72% · 88196953b3fffff");
    }

    #[test]
    fn test_heat_cell_color_ramp() {
        let mut cell = serde_json::from_str::<HeatmapGrid>(
            r#"{"center": [0, 0], "when_local": "", "radius_km": 1.0, "weight": "surge",
                "count": 1,
                "cells": [{"h3": "x", "value": 0.0, "center": [0, 0], "boundary": []}]}"#,
        )
        .unwrap()
        .cells
        .remove(0);

        assert_eq!(cell.fill_color(), "rgba(0, 255, 60, 0.56)");
        cell.value = 1.0;
        assert_eq!(cell.fill_color(), "rgba(255, 45, 60, 0.56)");
    }

    #[test]
    fn test_heatmap_query_cache_key() {
        let query = HeatmapQuery {
            lat: 51.9244,
            lng: 4.4777,
            radius_km: 3.0,
            weight: HeatWeight::Count,
            when: "2025-10-04T17:00:00+02:00".to_string(),
        };
        assert_eq!(query.cache_key(), query.clone().cache_key());

        let other = HeatmapQuery {
            weight: HeatWeight::Earnings,
            ..query.clone()
        };
        assert_ne!(query.cache_key(), other.cache_key());
    }

    #[test]
    fn test_heat_weight_parsing() {
        assert_eq!("earnings".parse::<HeatWeight>().unwrap(), HeatWeight::Earnings);
        assert_eq!("Surge".parse::<HeatWeight>().unwrap(), HeatWeight::Surge);
        assert!("distance".parse::<HeatWeight>().is_err());
        assert_eq!(HeatWeight::Count.to_string(), "count");
    }

    // ===== Earnings Model Tests =====

    #[test]
    fn test_today_live_labels() {
        let live = TodayLive {
            earn_eur: 156.4,
            minutes: 265.0,
        };
        assert_eq!(live.earnings_label(), "€156");
        assert_eq!(live.time_label(), "04:25");
    }

    #[test]
    fn test_incentive_achieved_accepts_sqlite_integers() {
        let json = r#"[
            {"week": "2025-W39", "program": "Weekend Warrior", "target_jobs": 30,
             "completed_jobs": 31, "achieved": 1, "bonus_eur": 80.0},
            {"week": "2025-W40", "program": "Weekend Warrior", "target_jobs": 30,
             "completed_jobs": 12, "achieved": false, "bonus_eur": 80.0}
        ]"#;

        let rows: Vec<IncentiveRow> = serde_json::from_str(json).unwrap();
        assert!(rows[0].achieved);
        assert!(!rows[1].achieved);
    }

    #[test]
    fn test_nudges_message_only_shape() {
        let list: NudgeList =
            serde_json::from_str(r#"{"message": "No session data available."}"#).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.message.as_deref(), Some("No session data available."));

        let list: NudgeList =
            serde_json::from_str(r#"{"nudges": ["Take a break."]}"#).unwrap();
        assert!(!list.is_empty());
    }

    // ===== FetchState Tests =====

    #[test]
    fn test_fetch_state_data_extraction() {
        let live = Rc::new(TodayLive {
            earn_eur: 10.0,
            minutes: 30.0,
        });
        let loaded = FetchState::Loaded(live.clone());
        assert_eq!(loaded.data(), Some(&live));
        assert!(!loaded.is_loading());

        let loading = FetchState::<TodayLive>::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        let error = FetchState::<TodayLive>::Error("boom".to_string());
        assert_eq!(error.error(), Some("boom"));
        assert!(error.data().is_none());
    }
}
