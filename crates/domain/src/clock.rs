//! # Clock（時刻プロバイダ）
//!
//! メール本文に埋め込む受信日時を `Utc::now()` の直接呼び出しから切り離し、
//! テストで固定時刻を注入できるようにする。

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

/// エクアドル本土と UTC の時差（時間）。夏時間はない。
const ECUADOR_UTC_OFFSET_HOURS: i64 = 5;

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 実際のシステム時刻を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 固定時刻を返すテスト用実装
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// UTC 時刻をエクアドル時間（America/Guayaquil）の壁時計時刻に変換する
pub fn to_ecuador_time(at: DateTime<Utc>) -> NaiveDateTime {
    at.naive_utc() - TimeDelta::hours(ECUADOR_UTC_OFFSET_HOURS)
}
