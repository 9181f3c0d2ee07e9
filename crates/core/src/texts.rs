//! Reading text tables, keyed by exhaustive matches or fixed-order arrays.

use crate::{Color, EchoOutlook, Element, Kind, Pattern};

pub fn center_archetype(kind: Kind) -> &'static str {
    match kind {
        Kind::General => "您目前的核心狀態展現出「帥」的特質：具有領導能力和影響力，喜歡指揮他人，但可能過於固執，需要學會傾聽他人意見",
        Kind::Advisor => "您目前的核心狀態展現出「仕」的特質：智慧能力佳，善於輔佐，有指揮與發令的氣勢，但可能過於多慮，有時會忽略親近的人",
        Kind::Elephant => "您目前的核心狀態展現出「相」的特質：工作能力佳但較為被動，喜歡靜坐而言勝過於起而行，需要他人協助才能發揮潛力",
        Kind::Chariot => "您目前的核心狀態展現出「俥」的特質：充滿積極進取的能量，敢於冒險，有強烈的主觀想法，但需注意過於衝動，不願受約束可能導致衝突",
        Kind::Horse => "您目前的核心狀態展現出「傌」的特質：勤奮努力且富有創意，有許多浪漫的想法，但方向可能不定，心太軟容易管閒事",
        Kind::Cannon => "您目前的核心狀態展現出「炮」的特質：內心渴望突破現狀，充滿變動的能量，但這也可能帶來不穩定與風險，容易感到恐懼或尋求取巧",
        Kind::Soldier => "您目前的核心狀態展現出「兵」的特質：做事踏實穩重，一步一腳印，重視現實和日常，但可能想太多，行動力較弱",
    }
}

pub fn center_disposition(color: Color) -> &'static str {
    match color {
        Color::Red => "您的外在表現較為積極主動，容易被他人看見與認可",
        Color::Black => "您的內在力量較強，但外在表現可能較為內斂，謀定而後動",
    }
}

pub const SURROUNDING_HEADER: &str = "在您周圍，同時存在著以下幾種力量：";

/// Influence of a surrounding piece: `(same color as center, different color)`.
pub fn influence(kind: Kind) -> (&'static str, &'static str) {
    match kind {
        Kind::General => ("一股強大的領導力量在支持您", "一股不同的主導意見在影響您"),
        Kind::Advisor => ("一份來自智囊的輔佐與支持", "一個需要您運用智慧去應對的建議"),
        Kind::Elephant => ("一股穩固的防守與支持力量", "一個提醒您需要穩固根基的信號"),
        Kind::Chariot => ("一股強勁的行動力與衝勁", "一個來自外界的直接挑戰或衝擊"),
        Kind::Horse => ("一份靈活的創意與助力", "一個帶來變數與不確定性的因素"),
        Kind::Cannon => ("一股突破性的變革能量", "一個潛在的衝突或需要跳躍式思維解決的問題"),
        Kind::Soldier => ("一份務實肯幹的支持", "一個提醒您需要腳踏實地的聲音"),
    }
}

/// Rows follow `Slot::SURROUNDING`; columns are supportive, complementary, friction.
pub const INTERACTION: [[&str; 3]; 4] = [
    [
        "與左方（同事/伴侶）關係和諧，價值觀相近",
        "與左方雖有差異但能互補，關係良好",
        "與左方存在價值觀差異，需要更多溝通",
    ],
    [
        "與右方（同事/家人）關係穩定，互相支持",
        "與右方能夠互相學習，關係有益",
        "與右方關係需要調整，避免衝突",
    ],
    [
        "與長輩/上司關係良好，容易獲得支持",
        "與長輩/上司雖有不同但能獲得指導",
        "與長輩/上司關係需要改善，可能有代溝",
    ],
    [
        "與晚輩/下屬關係融洽，能夠有效指導",
        "與晚輩/下屬能夠教學相長",
        "與晚輩/下屬關係需要耐心經營",
    ],
];

pub const CLAUSE_DELIMITER: &str = "；";

/// Center share of total points; tiers are `>= 2/5`, `>= 1/4`, below.
pub const PERSONAL_SHARE: [&str; 3] = [
    "個人能力強，在團隊中扮演重要角色",
    "個人能力中等，需要與他人合作",
    "個人能力相對較弱，需要更多學習和成長",
];

/// Same-color count including the center; tiers are `>= 4`, `>= 3`, below.
pub const SUPPORT: [&str; 3] = [
    "周圍支持力量強大，容易獲得幫助",
    "有一定的支持力量，但需要主動爭取",
    "支持力量較少，需要靠自己努力",
];

/// Opposite-color count; tiers are `>= 3`, `>= 2`, below.
pub const CHALLENGE: [&str; 3] = [
    "面臨較多挑戰，但也有更多學習機會",
    "挑戰與機會並存，需要平衡應對",
    "環境相對穩定，但可能缺乏刺激和成長",
];

/// Same-color points against opposite-color points: greater, equal, less.
pub const RETURN: [&str; 3] = [
    "付出會有相應回報，整體收穫大於付出",
    "付出與收穫基本平衡",
    "目前付出較多，收穫需要時間累積",
];

pub fn element_excess(element: Element) -> &'static str {
    match element {
        Element::Wood => "木過多：注意肝膽健康，避免過度勞累，控制情緒起伏",
        Element::Fire => "火過多：注意心臟血液循環，避免過度興奮，保持心情平靜",
        Element::Earth => "土過多：注意脾胃消化系統，避免思慮過度，規律飲食",
        Element::Metal => "金過多：注意肺部呼吸系統，避免過度悲觀，保持樂觀心態",
        Element::Water => "水過多：注意腎臟泌尿系統，避免過度恐懼，增強自信",
    }
}

pub fn element_deficiency(element: Element) -> &'static str {
    match element {
        Element::Wood => "缺木：可能肝膽功能較弱，建議多運動，培養耐心",
        Element::Fire => "缺火：可能心臟功能較弱，建議保持熱情，多與人交流",
        Element::Earth => "缺土：可能脾胃功能較弱，建議規律作息，穩定情緒",
        Element::Metal => "缺金：可能肺部功能較弱，建議深呼吸練習，培養決斷力",
        Element::Water => "缺水：可能腎臟功能較弱，建議多喝水，培養智慧",
    }
}

pub fn center_health(kind: Kind) -> Option<&'static str> {
    match kind {
        Kind::Soldier => Some("中間為兵卒：特別注意脾胃健康，避免暴飲暴食"),
        Kind::Cannon => Some("中間為包炮：注意腎臟和泌尿系統，避免過度緊張"),
        Kind::General | Kind::Advisor | Kind::Elephant | Kind::Chariot | Kind::Horse => None,
    }
}

pub const CONSUMPTION_HEALTH: &str = "存在消耗格：注意身心平衡，避免過度消耗體力和精神";
pub const BALANCED_HEALTH: &str = "五行相對平衡，整體健康狀況良好，建議保持現有的生活方式";

pub const TOO_MUCH_RED: &str = "紅棋過多，建議多與內斂穩重的人交流，學習沉穩的處事方式";
pub const TOO_MUCH_BLACK: &str = "黑棋過多，建議多與積極主動的人接觸，增加外向表達的機會";

pub fn pattern_counsel(pattern: Pattern) -> Option<&'static str> {
    match pattern {
        Pattern::AllRed | Pattern::AllBlack => {
            Some("格局過於單一，建議多元化發展，接觸不同類型的人和事物，避免思維僵化")
        }
        Pattern::SingularStandout => Some("雖然獨特出眾，但要注意與他人的協調合作，避免孤立無援"),
        Pattern::Echo(EchoOutlook::Favorable) => {
            Some("外界對您評價良好，但要注意內在修養，避免表裡不一")
        }
        Pattern::Echo(EchoOutlook::Unfavorable) => {
            Some("外界可能對您有誤解，建議多展現真實的自己，改善外在形象")
        }
        Pattern::CrossBlessing => Some("有天助之象，是發展的好時機，建議把握機會積極進取"),
        Pattern::Victory => Some("具有勝利的潛質，建議保持信心，堅持努力，成功在望"),
        Pattern::Umbrella => Some("有長輩庇護，但也要培養獨立能力，避免過度依賴"),
        Pattern::Romantic(_) => Some("人際關係豐富，異性緣佳，但要注意感情專一，避免桃花劫"),
        Pattern::Career => Some("適合專注事業發展，有成功的潛質，但要注意工作與生活的平衡"),
        Pattern::Wealth => Some("有富貴之象，容易得到貴人相助，建議善用人際關係，回饋社會"),
        Pattern::Entanglement => Some("面臨選擇困難，建議冷靜分析利弊，必要時尋求專業建議"),
        Pattern::Separation => {
            Some("人際關係可能面臨考驗，建議加強溝通，化解誤會，維護重要關係")
        }
        Pattern::Consumption => Some("存在能量消耗，建議適度休息，避免過度勞累，注意身心平衡"),
        Pattern::GoodFriend => Some("人際關係良好，有互助的朋友，建議珍惜友誼，互相扶持"),
        Pattern::ConvergingStars | Pattern::UnityOfThree => None,
    }
}

pub fn center_counsel(kind: Kind) -> &'static str {
    match kind {
        Kind::General => "具有領導才能，建議培養包容心，學會授權，避免事必躬親。",
        Kind::Advisor => "智慧能力強，建議多關心身邊親近的人，平衡工作與家庭。",
        Kind::Elephant => "需要提高行動力，建議設定明確目標，主動出擊，不要只是等待。",
        Kind::Chariot => "行動力強但需要方向，建議制定詳細計劃，避免盲目衝動。",
        Kind::Horse => "富有創意但方向不定，建議專注一個領域深耕，避免三心二意。",
        Kind::Cannon => "想要突破但風險高，建議穩中求進，做好風險評估再行動。",
        Kind::Soldier => "踏實穩重是優點，建議適度冒險，抓住機會提升自己。",
    }
}

/// Clauses appended to the center counsel when the partner kind is also drawn.
pub fn center_partners(kind: Kind) -> &'static [(Kind, &'static str)] {
    match kind {
        Kind::General => &[
            (Kind::Chariot, "結合（俥/車）的行動力，您的領導將更具執行效率。"),
            (Kind::Advisor, "善用（仕/士）的智慧，您的決策會更加周全。"),
        ],
        Kind::Advisor => &[(
            Kind::General,
            "當前是您發揮輔佐才能，協助領導者（帥/將）的絕佳時機。",
        )],
        Kind::Elephant => &[(Kind::Soldier, "結合（兵/卒）的穩健，您的行動將會更加踏實可靠。")],
        Kind::Chariot => &[(Kind::Horse, "搭配（傌/馬）的靈活，能讓您在衝刺時找到更多可能性。")],
        Kind::Horse => &[(Kind::Cannon, "若能將創意與（炮/包）的突破力結合，將有驚人成果。")],
        Kind::Cannon => &[(Kind::Soldier, "奠基於（兵/卒）的穩固基礎上進行突破，成功率會更高。")],
        Kind::Soldier => &[(Kind::Chariot, "藉助（俥/車）的衝勁，能幫助您跨出舒適圈，迎接新挑戰。")],
    }
}

/// Only Earth and Water carry an element-driven suggestion.
pub const ELEMENT_COUNSEL: [(Element, &str); 2] = [
    (Element::Earth, "脾胃較弱，建議規律飲食，少食多餐，避免暴飲暴食"),
    (Element::Water, "腎氣不足，建議早睡早起，適度運動，避免過度勞累"),
];

pub const FALLBACK_COUNSEL: [&str; 2] = [
    "整體運勢平穩，建議保持現狀並適度進取，注意身心平衡",
    "多與不同類型的人交流，擴展視野，增加人生閱歷",
];
