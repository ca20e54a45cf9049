use actix_files::Files;
use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use chrono::{Datelike, Local, Timelike};
use serde::Serialize;
use std::sync::Mutex;

use crate::form::{validate_week, week_to_csv};
use crate::store::ScheduleStore;
use crate::timetable::period_times::{
    PeriodInterval, BREAK_AFTER_PERIOD, BREAK_LABEL, PERIOD_TIME_LABELS,
};
use crate::timetable::resolver::{resolve, scheduled_periods};
use crate::timetable::types::{DaySchedule, WeekSchedule, Weekday};

/// Shared server state: the current week snapshot plus the store it is
/// persisted through. Saves replace the snapshot wholesale, so a request
/// reading it mid-edit still sees a complete week.
pub struct AppState {
    pub week: Mutex<WeekSchedule>,
    pub store: Box<dyn ScheduleStore>,
    pub intervals: Vec<PeriodInterval>,
}

#[derive(Serialize)]
pub struct PeriodView {
    pub ordinal: usize,
    pub subject: String,
    pub room: String,
    pub label: String,
}

/// What the Home page polls once per second
#[derive(Serialize)]
pub struct NowResponse {
    pub weekday: String,
    pub time: String,
    pub state: String,
    pub active: Option<PeriodView>,
    pub upcoming: Option<PeriodView>,
    pub remaining_seconds: Option<u64>,
}

fn period_view(day: &DaySchedule, ordinal: usize) -> PeriodView {
    PeriodView {
        ordinal,
        subject: day[ordinal].subject.clone(),
        room: day[ordinal].room.clone(),
        label: PERIOD_TIME_LABELS[ordinal].to_string(),
    }
}

/// Resolves the current instant against one day of the week. Pulled out of
/// the handler so it can be exercised with a fixed clock.
pub fn now_response(
    week: &WeekSchedule,
    intervals: &[PeriodInterval],
    weekday: Weekday,
    now_seconds: u32,
    time: String,
) -> NowResponse {
    let day = week.day(weekday);
    let periods = scheduled_periods(day, intervals);
    let result = resolve(&periods, now_seconds);

    // The resolver reports "nothing left" the same way for an empty day and
    // a finished one; the page copy differs, so tag them apart here
    let state = if periods.is_empty() {
        "empty"
    } else if result.active.is_some() {
        "active"
    } else if let Some(upcoming) = result.upcoming {
        if upcoming == periods[0].ordinal {
            "before"
        } else {
            "between"
        }
    } else {
        "done"
    };

    NowResponse {
        weekday: weekday.name().to_string(),
        time,
        state: state.to_string(),
        active: result.active.map(|ordinal| period_view(day, ordinal)),
        upcoming: result.upcoming.map(|ordinal| period_view(day, ordinal)),
        remaining_seconds: result.remaining_seconds,
    }
}

// Current and next class for the Home page cards
async fn get_now(state: web::Data<AppState>) -> Result<HttpResponse> {
    let now = Local::now();
    let weekday = Weekday::from_chrono(now.weekday());
    let now_seconds = now.time().num_seconds_from_midnight();
    let time = now.format("%H:%M:%S").to_string();

    let week = state.week.lock().unwrap();
    let response = now_response(&week, &state.intervals, weekday, now_seconds, time);
    Ok(HttpResponse::Ok().json(response))
}

// The full grid plus its fixed configuration, for the Timetable page
async fn get_timetable(state: web::Data<AppState>) -> Result<HttpResponse> {
    let week = state.week.lock().unwrap();
    let day_names: Vec<&str> = Weekday::ALL.iter().map(|day| day.name()).collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "days": day_names,
        "period_times": PERIOD_TIME_LABELS,
        "break": {
            "label": BREAK_LABEL,
            "after_period": BREAK_AFTER_PERIOD,
        },
        "week": &*week,
    })))
}

// Full-replace save from the edit form
async fn put_timetable(
    payload: web::Json<Vec<DaySchedule>>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if let Err(error) = validate_week(&payload) {
        return Ok(HttpResponse::BadRequest()
            .json(serde_json::json!({"success": false, "error": error})));
    }

    let week = WeekSchedule::from_days(payload.into_inner());

    // Persist first, then swap the snapshot
    if let Err(error) = state.store.save(&week) {
        log::error!("Failed to save timetable: {}", error);
        return Ok(HttpResponse::InternalServerError()
            .json(serde_json::json!({"success": false, "error": "Failed to save timetable"})));
    }

    *state.week.lock().unwrap() = week;
    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
}

// Reset the whole week to unscheduled
async fn clear_timetable(state: web::Data<AppState>) -> Result<HttpResponse> {
    let week = WeekSchedule::empty();

    if let Err(error) = state.store.save(&week) {
        log::error!("Failed to clear timetable: {}", error);
        return Ok(HttpResponse::InternalServerError()
            .json(serde_json::json!({"success": false, "error": "Failed to clear timetable"})));
    }

    *state.week.lock().unwrap() = week;
    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
}

// CSV download of the current week
async fn export_csv_file(state: web::Data<AppState>) -> Result<HttpResponse> {
    let week = state.week.lock().unwrap();
    match week_to_csv(&week) {
        Ok(csv) => Ok(HttpResponse::Ok()
            .content_type("text/csv")
            .insert_header(("Content-Disposition", "attachment; filename=\"timetable.csv\""))
            .body(csv)),
        Err(error) => {
            log::error!("Failed to export timetable: {}", error);
            Ok(HttpResponse::InternalServerError()
                .json(serde_json::json!({"error": "Failed to export timetable"})))
        }
    }
}

// HTML page handlers
async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

async fn timetable_page() -> Result<HttpResponse> {
    let html = include_str!("../templates/timetable.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

async fn privacy_page() -> Result<HttpResponse> {
    let html = include_str!("../templates/privacy.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

pub async fn start_server(
    port: u16,
    store: Box<dyn ScheduleStore>,
    intervals: Vec<PeriodInterval>,
) -> std::io::Result<()> {
    let week = store.load();
    let app_state = web::Data::new(AppState {
        week: Mutex::new(week),
        store,
        intervals,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "static"))
            .route("/", web::get().to(index))
            .route("/timetable", web::get().to(timetable_page))
            .route("/privacy", web::get().to(privacy_page))
            .route("/api/now", web::get().to(get_now))
            .route("/api/timetable", web::get().to(get_timetable))
            .route("/api/timetable", web::put().to(put_timetable))
            .route("/api/timetable", web::delete().to(clear_timetable))
            .route("/api/export", web::get().to(export_csv_file))
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
