//! Ordered category keyword rules.
//!
//! Matching is first-match-wins: rules in declared order, keywords in list
//! order, case-sensitive substring containment. The declared order is part of
//! the contract, which is why this is a slice and not a map.

/// One category with its trigger keywords.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
}

pub const CATEGORY_RULES: [CategoryRule; 7] = [
    CategoryRule {
        category: "업무",
        keywords: &["회사", "업무", "프로젝트", "야근", "회의"],
    },
    CategoryRule {
        category: "학업",
        keywords: &["공부", "과제", "시험", "학교", "강의", "지식", "습득"],
    },
    CategoryRule {
        category: "관계",
        keywords: &["친구", "가족", "연인", "만남", "대화"],
    },
    CategoryRule {
        category: "건강",
        keywords: &["운동", "다이어트", "병원", "건강", "피곤"],
    },
    CategoryRule {
        category: "여행",
        keywords: &["여행", "휴가", "비행기", "해외", "숙소"],
    },
    CategoryRule {
        category: "일상",
        keywords: &["일상", "하루", "오늘", "점심", "저녁"],
    },
    CategoryRule {
        category: "음식",
        keywords: &["음식", "요리", "맛집", "먹방", "카페"],
    },
];

/// The keyword that decided a category match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch {
    pub category: &'static str,
    pub keyword: &'static str,
}

/// First keyword contained in `text`, in table order.
pub fn match_keywords(text: &str) -> Option<KeywordMatch> {
    for rule in &CATEGORY_RULES {
        for keyword in rule.keywords {
            if text.contains(keyword) {
                return Some(KeywordMatch {
                    category: rule.category,
                    keyword,
                });
            }
        }
    }
    None
}
