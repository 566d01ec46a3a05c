//! Goal form types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GoalError;

/// The narrative details collected for one 30-day goal picture.
///
/// JSON uses camelCase field names (`targetDate`, `fullName`, ...). Every
/// field is free text; [`validate_form`](crate::validate_form) checks them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalForm {
    /// Date the goal is reached, as the user writes it (e.g. "31/01/2026").
    pub target_date: String,
    /// The user's name.
    pub full_name: String,
    /// Profit target in VND, as written (e.g. "60,000,000").
    pub profit_goal: String,
    /// Account the money arrives in.
    pub bank_account: String,
    /// Sound of the payment notification.
    pub money_sound: String,
    /// Where the user is at that moment.
    pub location: String,
    /// Dominant sense; one of [`Sense::ALL`].
    pub dominant_sense: String,
    /// Who the user is with.
    pub companion: String,
    /// The companion's age.
    pub companion_age: String,
    /// What the companion is doing.
    pub companion_activity: String,
    /// People who send congratulations.
    pub congratulators: String,
    /// What they call the user informally.
    pub informal_title: String,
    /// Community platform the user posts to.
    pub platform: String,
    /// The user's professional title.
    pub professional_title: String,
}

impl GoalForm {
    /// The prefilled sample form.
    pub fn example() -> Self {
        Self {
            target_date: "31/01/2026".to_string(),
            full_name: "Hồng Linh".to_string(),
            profit_goal: "60,000,000".to_string(),
            bank_account: "BIDV 777".to_string(),
            money_sound: "ting ting".to_string(),
            location: "Khách sạn Emissary Central Hotel & Spa Hà Nội".to_string(),
            dominant_sense: Sense::Hearing.as_str().to_string(),
            companion: "con trai".to_string(),
            companion_age: "17 tuổi".to_string(),
            companion_activity: "đang thưởng thức món tôm hùm siêu đỉnh".to_string(),
            congratulators: "doanh nhân Lê Trường, doanh nhân Hồng Nga, chủ tịch Đoàn Mai Ly"
                .to_string(),
            informal_title: "bạn".to_string(),
            platform: "Zoom Liên Minh".to_string(),
            professional_title: "doanh nhân Hồng Linh".to_string(),
        }
    }

    /// Parses a form from JSON. Missing fields default to empty strings.
    pub fn from_json(json: &str) -> Result<Self, GoalError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the form as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, GoalError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// All fields as `(json_name, value)` pairs, in form order.
    pub fn fields(&self) -> [(&'static str, &str); 14] {
        [
            ("targetDate", self.target_date.as_str()),
            ("fullName", self.full_name.as_str()),
            ("profitGoal", self.profit_goal.as_str()),
            ("bankAccount", self.bank_account.as_str()),
            ("moneySound", self.money_sound.as_str()),
            ("location", self.location.as_str()),
            ("dominantSense", self.dominant_sense.as_str()),
            ("companion", self.companion.as_str()),
            ("companionAge", self.companion_age.as_str()),
            ("companionActivity", self.companion_activity.as_str()),
            ("congratulators", self.congratulators.as_str()),
            ("informalTitle", self.informal_title.as_str()),
            ("platform", self.platform.as_str()),
            ("professionalTitle", self.professional_title.as_str()),
        ]
    }

    /// The dominant sense, if it names one of the six senses.
    pub fn sense(&self) -> Option<Sense> {
        self.dominant_sense.parse().ok()
    }
}

/// The six senses a goal picture can lead with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sense {
    /// Nghe
    #[serde(rename = "Nghe")]
    Hearing,
    /// Nhìn
    #[serde(rename = "Nhìn")]
    Sight,
    /// Ngửi
    #[serde(rename = "Ngửi")]
    Smell,
    /// Nếm
    #[serde(rename = "Nếm")]
    Taste,
    /// Chạm
    #[serde(rename = "Chạm")]
    Touch,
    /// Cảm xúc nội tâm
    #[serde(rename = "Cảm xúc nội tâm")]
    Feeling,
}

impl Sense {
    /// All senses in display order.
    pub const ALL: [Sense; 6] = [
        Sense::Hearing,
        Sense::Sight,
        Sense::Smell,
        Sense::Taste,
        Sense::Touch,
        Sense::Feeling,
    ];

    /// The Vietnamese label used in forms and prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sense::Hearing => "Nghe",
            Sense::Sight => "Nhìn",
            Sense::Smell => "Ngửi",
            Sense::Taste => "Nếm",
            Sense::Touch => "Chạm",
            Sense::Feeling => "Cảm xúc nội tâm",
        }
    }
}

impl std::fmt::Display for Sense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string is not one of the six sense labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSense(pub String);

impl std::fmt::Display for UnknownSense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown sense '{}'", self.0)
    }
}

impl std::error::Error for UnknownSense {}

impl FromStr for Sense {
    type Err = UnknownSense;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Sense::ALL
            .into_iter()
            .find(|sense| sense.as_str() == trimmed)
            .ok_or_else(|| UnknownSense(s.to_string()))
    }
}
