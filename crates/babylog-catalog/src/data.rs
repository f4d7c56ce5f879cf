//! The built-in reference datasets.
//!
//! Milestones follow the K-DST (Korean Developmental Screening Test) age bands;
//! the vaccination list is the Korean national schedule up to age 12.

use crate::{Milestone, MilestoneCategory, Vaccination};

/// Korean national immunisation schedule, birth to 12 years.
pub static VACCINATIONS: &[Vaccination] = &[
    Vaccination {
        id: "hepb1",
        disease: "B형간염",
        dose_number: 1,
        recommended_month: 0,
        description: "출생 직후",
    },
    Vaccination {
        id: "bcg",
        disease: "결핵(BCG)",
        dose_number: 1,
        recommended_month: 0,
        description: "생후 4주 이내",
    },
    Vaccination {
        id: "hepb2",
        disease: "B형간염",
        dose_number: 2,
        recommended_month: 1,
        description: "",
    },
    Vaccination {
        id: "dtap1",
        disease: "디프테리아/파상풍/백일해",
        dose_number: 1,
        recommended_month: 2,
        description: "DTaP",
    },
    Vaccination {
        id: "ipv1",
        disease: "폴리오",
        dose_number: 1,
        recommended_month: 2,
        description: "IPV",
    },
    Vaccination {
        id: "hib1",
        disease: "b형헤모필루스",
        dose_number: 1,
        recommended_month: 2,
        description: "뇌수막염(Hib)",
    },
    Vaccination {
        id: "pcv1",
        disease: "폐렴구균",
        dose_number: 1,
        recommended_month: 2,
        description: "PCV",
    },
    Vaccination {
        id: "rv1",
        disease: "로타바이러스",
        dose_number: 1,
        recommended_month: 2,
        description: "RV",
    },
    Vaccination {
        id: "dtap2",
        disease: "디프테리아/파상풍/백일해",
        dose_number: 2,
        recommended_month: 4,
        description: "DTaP",
    },
    Vaccination {
        id: "ipv2",
        disease: "폴리오",
        dose_number: 2,
        recommended_month: 4,
        description: "IPV",
    },
    Vaccination {
        id: "hib2",
        disease: "b형헤모필루스",
        dose_number: 2,
        recommended_month: 4,
        description: "뇌수막염(Hib)",
    },
    Vaccination {
        id: "pcv2",
        disease: "폐렴구균",
        dose_number: 2,
        recommended_month: 4,
        description: "PCV",
    },
    Vaccination {
        id: "rv2",
        disease: "로타바이러스",
        dose_number: 2,
        recommended_month: 4,
        description: "RV",
    },
    Vaccination {
        id: "hepb3",
        disease: "B형간염",
        dose_number: 3,
        recommended_month: 6,
        description: "",
    },
    Vaccination {
        id: "dtap3",
        disease: "디프테리아/파상풍/백일해",
        dose_number: 3,
        recommended_month: 6,
        description: "DTaP",
    },
    Vaccination {
        id: "ipv3",
        disease: "폴리오",
        dose_number: 3,
        recommended_month: 6,
        description: "IPV",
    },
    Vaccination {
        id: "hib3",
        disease: "b형헤모필루스",
        dose_number: 3,
        recommended_month: 6,
        description: "뇌수막염(Hib)",
    },
    Vaccination {
        id: "pcv3",
        disease: "폐렴구균",
        dose_number: 3,
        recommended_month: 6,
        description: "PCV",
    },
    Vaccination {
        id: "rv3",
        disease: "로타바이러스",
        dose_number: 3,
        recommended_month: 6,
        description: "RV",
    },
    Vaccination {
        id: "flu",
        disease: "인플루엔자",
        dose_number: 1,
        recommended_month: 6,
        description: "생후 6개월 이후 매년 접종",
    },
    Vaccination {
        id: "hib4",
        disease: "b형헤모필루스",
        dose_number: 4,
        recommended_month: 12,
        description: "12~15개월 (뇌수막염)",
    },
    Vaccination {
        id: "pcv4",
        disease: "폐렴구균",
        dose_number: 4,
        recommended_month: 12,
        description: "12~15개월",
    },
    Vaccination {
        id: "mmr1",
        disease: "홍역/유행성이하선염/풍진",
        dose_number: 1,
        recommended_month: 12,
        description: "MMR (12~15개월)",
    },
    Vaccination {
        id: "var",
        disease: "수두",
        dose_number: 1,
        recommended_month: 12,
        description: "12~15개월",
    },
    Vaccination {
        id: "hepa1",
        disease: "A형간염",
        dose_number: 1,
        recommended_month: 12,
        description: "12~23개월",
    },
    Vaccination {
        id: "je1",
        disease: "일본뇌염",
        dose_number: 1,
        recommended_month: 12,
        description: "12~23개월 (사백신 1차)",
    },
    Vaccination {
        id: "je2",
        disease: "일본뇌염",
        dose_number: 2,
        recommended_month: 13,
        description: "1차 후 1개월 (사백신 2차)",
    },
    Vaccination {
        id: "dtap4",
        disease: "디프테리아/파상풍/백일해",
        dose_number: 4,
        recommended_month: 15,
        description: "15~18개월",
    },
    Vaccination {
        id: "hepa2",
        disease: "A형간염",
        dose_number: 2,
        recommended_month: 18,
        description: "1차 후 6개월 뒤",
    },
    Vaccination {
        id: "je3",
        disease: "일본뇌염",
        dose_number: 3,
        recommended_month: 24,
        description: "24~35개월 (사백신 3차)",
    },
    Vaccination {
        id: "dtap5",
        disease: "디프테리아/파상풍/백일해",
        dose_number: 5,
        recommended_month: 48,
        description: "만 4~6세",
    },
    Vaccination {
        id: "ipv4",
        disease: "폴리오",
        dose_number: 4,
        recommended_month: 48,
        description: "만 4~6세",
    },
    Vaccination {
        id: "mmr2",
        disease: "홍역/유행성이하선염/풍진",
        dose_number: 2,
        recommended_month: 48,
        description: "만 4~6세",
    },
    Vaccination {
        id: "je4",
        disease: "일본뇌염",
        dose_number: 4,
        recommended_month: 72,
        description: "만 6세 (사백신 4차)",
    },
    Vaccination {
        id: "tdap6",
        disease: "파상풍/디프테리아/백일해",
        dose_number: 6,
        recommended_month: 132,
        description: "Tdap (만 11~12세)",
    },
    Vaccination {
        id: "je5",
        disease: "일본뇌염",
        dose_number: 5,
        recommended_month: 144,
        description: "만 12세 (사백신 5차)",
    },
    Vaccination {
        id: "hpv1",
        disease: "사람유두종바이러스",
        dose_number: 1,
        recommended_month: 144,
        description: "만 12세 여아 1차",
    },
];

/// Developmental milestones, ordered by age band.
pub static MILESTONES: &[Milestone] = &[
    Milestone {
        id: "nb_eye_contact",
        title: "눈 맞추기",
        detail: "엄마 아빠와 눈을 맞추고 시선을 유지한다.",
        month_from: 0,
        month_to: 1,
        category: MilestoneCategory::Social,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "nb_sound_react",
        title: "소리 반응",
        detail: "딸랑이 소리나 목소리에 반응하여 깜짝 놀라거나 쳐다본다.",
        month_from: 0,
        month_to: 1,
        category: MilestoneCategory::Cognitive,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "nb_fist",
        title: "주먹 쥐기",
        detail: "손을 대부분 꽉 쥐고 있다가 서서히 펴기 시작한다.",
        month_from: 0,
        month_to: 1,
        category: MilestoneCategory::FineMotor,
        is_core: false,
        prerequisite_id: None,
    },
    Milestone {
        id: "nb_cooing",
        title: "옹알이(쿠잉)",
        detail: "기분이 좋을 때 '아~', '우~' 같은 모음 소리를 낸다.",
        month_from: 2,
        month_to: 3,
        category: MilestoneCategory::Language,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "nb_social_smile",
        title: "사회적 미소",
        detail: "얼르고 달래주면 방긋 웃는다 (배냇짓 아님).",
        month_from: 2,
        month_to: 3,
        category: MilestoneCategory::Social,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "nb_head_lift_prone",
        title: "엎드려 고개 들기",
        detail: "엎드린 자세에서 고개를 45도 이상 들어 올린다.",
        month_from: 2,
        month_to: 3,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_4_neck_control",
        title: "목 가누기",
        detail: "세워 안았을 때 머리가 흔들리지 않고 꼿꼿하다.",
        month_from: 4,
        month_to: 5,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_4_flip_one_way",
        title: "뒤집기(한 방향)",
        detail: "바로 누운 자세에서 엎드린 자세로 몸을 뒤집는다.",
        month_from: 4,
        month_to: 5,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_4_grab_rattle",
        title: "딸랑이 잡기",
        detail: "손에 딸랑이를 쥐여주면 잠시 잡고 있는다.",
        month_from: 4,
        month_to: 5,
        category: MilestoneCategory::FineMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_4_look_hands",
        title: "손 쳐다보기",
        detail: "자기 손을 흥미롭게 쳐다보며 논다 (손 주시).",
        month_from: 4,
        month_to: 5,
        category: MilestoneCategory::Cognitive,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_4_laugh_aloud",
        title: "소리 내어 웃기",
        detail: "기분이 좋을 때 큰 소리로 웃는다.",
        month_from: 4,
        month_to: 5,
        category: MilestoneCategory::Social,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_4_babble_loud",
        title: "큰 소리 옹알이",
        detail: "높은 소리로 '꺄아' 소리를 지르거나 다양한 옹알이를 한다.",
        month_from: 4,
        month_to: 5,
        category: MilestoneCategory::Language,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_6_sit_support",
        title: "혼자 앉아 버티기",
        detail: "잠깐 동안 손을 짚지 않고 혼자 앉아 있는다.",
        month_from: 6,
        month_to: 7,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: Some("kdst_4_neck_control"),
    },
    Milestone {
        id: "kdst_6_flip_both",
        title: "배밀이/자유 뒤집기",
        detail: "양방향으로 자유롭게 뒤집거나 배밀이를 시도한다.",
        month_from: 6,
        month_to: 7,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: Some("kdst_4_flip_one_way"),
    },
    Milestone {
        id: "kdst_6_reach_grasp",
        title: "손 뻗어 잡기",
        detail: "원하는 물건을 보고 손을 뻗어서 잡는다.",
        month_from: 6,
        month_to: 7,
        category: MilestoneCategory::FineMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_6_transfer_hand",
        title: "손 바꿔 쥐기",
        detail: "장난감을 한 손에서 다른 손으로 옮겨 잡는다.",
        month_from: 6,
        month_to: 7,
        category: MilestoneCategory::FineMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_6_stranger",
        title: "낯가림",
        detail: "낯선 사람을 보면 울거나 피하려는 반응을 보인다.",
        month_from: 6,
        month_to: 7,
        category: MilestoneCategory::Social,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_6_turn_to_sound",
        title: "소리 나는 쪽 보기",
        detail: "작은 소리가 나도 고개를 돌려 정확히 찾는다.",
        month_from: 6,
        month_to: 7,
        category: MilestoneCategory::Cognitive,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_6_eat_cookie",
        title: "과자 혼자 먹기",
        detail: "아기 과자나 떡뻥을 혼자 쥐고 먹는다.",
        month_from: 6,
        month_to: 7,
        category: MilestoneCategory::SelfHelp,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_8_sit_alone",
        title: "안정되게 앉기",
        detail: "도움 없이 혼자 앉아서 장난감을 가지고 논다.",
        month_from: 8,
        month_to: 9,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: Some("kdst_6_sit_support"),
    },
    Milestone {
        id: "kdst_8_crawl",
        title: "네 발 기기",
        detail: "배를 들고 무릎과 손으로 기어 다닌다.",
        month_from: 8,
        month_to: 9,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_8_pull_stand",
        title: "붙잡고 일어서기",
        detail: "가구나 사람을 잡고 스스로 일어선다.",
        month_from: 8,
        month_to: 9,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_8_clap_hands",
        title: "짝짜꿍/곤지곤지",
        detail: "짝짜꿍, 곤지곤지 같은 손동작을 따라 한다.",
        month_from: 8,
        month_to: 9,
        category: MilestoneCategory::Social,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_8_syllables",
        title: "음절 말하기",
        detail: "'마마', '바바', '다다' 같은 소리를 반복해서 낸다.",
        month_from: 8,
        month_to: 9,
        category: MilestoneCategory::Language,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_8_pick_small",
        title: "작은 물건 잡기(갈퀴)",
        detail: "손가락 전체를 긁어 모으듯 작은 과자 등을 잡는다.",
        month_from: 8,
        month_to: 9,
        category: MilestoneCategory::FineMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_8_feed_self",
        title: "혼자 집어 먹기",
        detail: "작게 자른 핑거푸드를 손가락으로 집어 입에 넣는다.",
        month_from: 8,
        month_to: 9,
        category: MilestoneCategory::SelfHelp,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_10_cruise",
        title: "가구 잡고 걷기",
        detail: "가구나 벽을 잡고 옆으로 발을 떼며 걷는다.",
        month_from: 10,
        month_to: 11,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: Some("kdst_8_pull_stand"),
    },
    Milestone {
        id: "kdst_10_stand_alone",
        title: "잠시 혼자 서기",
        detail: "아무것도 잡지 않고 잠시(2~3초) 서 있는다.",
        month_from: 10,
        month_to: 11,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_10_pincer_grasp",
        title: "집게 손가락 사용",
        detail: "엄지와 검지만 사용하여 작은 물건을 정확히 집는다.",
        month_from: 10,
        month_to: 11,
        category: MilestoneCategory::FineMotor,
        is_core: true,
        prerequisite_id: Some("kdst_8_pick_small"),
    },
    Milestone {
        id: "kdst_10_object_perm",
        title: "숨긴 물건 찾기",
        detail: "보는 앞에서 수건으로 장난감을 덮으면 들춰서 찾는다 (대상연속성).",
        month_from: 10,
        month_to: 11,
        category: MilestoneCategory::Cognitive,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_10_understand_no",
        title: "안돼/금지 이해",
        detail: "'안돼'라고 말하면 하던 행동을 잠시 멈춘다.",
        month_from: 10,
        month_to: 11,
        category: MilestoneCategory::Language,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_10_wave_bye",
        title: "빠이빠이 하기",
        detail: "헤어질 때 손을 흔들어 인사한다.",
        month_from: 10,
        month_to: 11,
        category: MilestoneCategory::Social,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_10_cup_drink",
        title: "컵으로 마시기",
        detail: "도와주면 컵에 든 물을 마신다.",
        month_from: 10,
        month_to: 11,
        category: MilestoneCategory::SelfHelp,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_12_walk_alone",
        title: "혼자 걷기",
        detail: "아무것도 잡지 않고 혼자서 몇 걸음 걷는다.",
        month_from: 12,
        month_to: 13,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: Some("kdst_10_stand_alone"),
    },
    Milestone {
        id: "kdst_12_put_in_container",
        title: "통에 물건 넣기",
        detail: "작은 물건을 병이나 통 속에 집어 넣는다.",
        month_from: 12,
        month_to: 13,
        category: MilestoneCategory::FineMotor,
        is_core: true,
        prerequisite_id: Some("kdst_10_pincer_grasp"),
    },
    Milestone {
        id: "kdst_12_one_word",
        title: "의미 있는 단어",
        detail: "엄마, 아빠 외에 의미 있는 단어를 1개 이상 말한다.",
        month_from: 12,
        month_to: 13,
        category: MilestoneCategory::Language,
        is_core: true,
        prerequisite_id: Some("kdst_8_syllables"),
    },
    Milestone {
        id: "kdst_12_point_want",
        title: "손가락으로 가리키기",
        detail: "원하는 것을 손가락으로 가리켜 표현한다 (포인팅).",
        month_from: 12,
        month_to: 13,
        category: MilestoneCategory::Social,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_12_give_object",
        title: "물건 건네주기",
        detail: "'주세요' 하면 손에 든 물건을 건네준다.",
        month_from: 12,
        month_to: 13,
        category: MilestoneCategory::Social,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_12_dressing_help",
        title: "옷 입을 때 협조",
        detail: "옷을 입힐 때 팔이나 다리를 뻗으며 도와준다.",
        month_from: 12,
        month_to: 13,
        category: MilestoneCategory::SelfHelp,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_14_walk_well",
        title: "안정적으로 걷기",
        detail: "넘어지지 않고 꽤 먼 거리를 안정적으로 걷는다.",
        month_from: 14,
        month_to: 15,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: Some("kdst_12_walk_alone"),
    },
    Milestone {
        id: "kdst_14_stack_blocks",
        title: "블록 2개 쌓기",
        detail: "블록(적목)을 2개 이상 쌓아 올린다.",
        month_from: 14,
        month_to: 15,
        category: MilestoneCategory::FineMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_14_scribble",
        title: "낙서하기",
        detail: "크레파스나 연필을 쥐고 종이에 끄적거린다.",
        month_from: 14,
        month_to: 15,
        category: MilestoneCategory::FineMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_14_vocab_increase",
        title: "단어 5개 이상",
        detail: "엄마, 아빠를 포함해 5개 이상의 단어를 말한다.",
        month_from: 14,
        month_to: 15,
        category: MilestoneCategory::Language,
        is_core: true,
        prerequisite_id: Some("kdst_12_one_word"),
    },
    Milestone {
        id: "kdst_14_imitate_household",
        title: "집안일 흉내",
        detail: "청소하기, 전화 받기 등 어른의 행동을 모방한다.",
        month_from: 14,
        month_to: 15,
        category: MilestoneCategory::Social,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_14_spoon_scoop",
        title: "숟가락질 시도",
        detail: "숟가락으로 음식을 떠서 입에 넣으려고 시도한다 (흘려도 됨).",
        month_from: 14,
        month_to: 15,
        category: MilestoneCategory::SelfHelp,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_16_run_stiff",
        title: "빠르게 걷기/뛰기",
        detail: "빠르게 걷거나 서툴게 뛰는 동작을 한다.",
        month_from: 16,
        month_to: 17,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: Some("kdst_14_walk_well"),
    },
    Milestone {
        id: "kdst_16_stack_3_blocks",
        title: "블록 3개 쌓기",
        detail: "블록을 3개 이상 쌓아 올린다.",
        month_from: 16,
        month_to: 17,
        category: MilestoneCategory::FineMotor,
        is_core: true,
        prerequisite_id: Some("kdst_14_stack_blocks"),
    },
    Milestone {
        id: "kdst_16_body_parts",
        title: "신체 부위 가리키기",
        detail: "'눈 어딨어?' 하면 자신의 눈이나 코를 가리킨다.",
        month_from: 16,
        month_to: 17,
        category: MilestoneCategory::Cognitive,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_16_vocab_10",
        title: "단어 10개 이상",
        detail: "말할 수 있는 단어가 10개 이상 된다.",
        month_from: 16,
        month_to: 17,
        category: MilestoneCategory::Language,
        is_core: true,
        prerequisite_id: Some("kdst_14_vocab_increase"),
    },
    Milestone {
        id: "kdst_16_show_toy",
        title: "장난감 보여주기",
        detail: "자기가 좋아하는 장난감을 남에게 보여준다.",
        month_from: 16,
        month_to: 17,
        category: MilestoneCategory::Social,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_18_stairs_held",
        title: "난간 잡고 계단 오르기",
        detail: "난간이나 손을 잡고 계단을 걸어 올라간다.",
        month_from: 18,
        month_to: 19,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_18_kick_ball",
        title: "공 차기",
        detail: "서 있는 자세에서 공을 발로 찬다.",
        month_from: 18,
        month_to: 19,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_18_draw_line",
        title: "선 긋기 모방",
        detail: "수직선을 그어주면 따라서 그린다.",
        month_from: 18,
        month_to: 19,
        category: MilestoneCategory::FineMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_18_vocab_20",
        title: "어휘 폭발 (20단어+)",
        detail: "말할 수 있는 단어가 급격히 늘어 20개 이상이 된다.",
        month_from: 18,
        month_to: 19,
        category: MilestoneCategory::Language,
        is_core: true,
        prerequisite_id: Some("kdst_16_vocab_10"),
    },
    Milestone {
        id: "kdst_18_two_word_phrases",
        title: "두 단어 연결 시도",
        detail: "'엄마 까까', '아빠 가' 처럼 단어를 붙이려 한다.",
        month_from: 18,
        month_to: 19,
        category: MilestoneCategory::Language,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_18_remove_clothes",
        title: "옷 벗기",
        detail: "양말이나 모자, 간단한 옷을 스스로 벗는다.",
        month_from: 18,
        month_to: 19,
        category: MilestoneCategory::SelfHelp,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_20_jump_place",
        title: "제자리 점프",
        detail: "두 발을 모아 제자리에서 깡충 뛴다.",
        month_from: 20,
        month_to: 21,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_20_stack_5_blocks",
        title: "블록 5개 쌓기",
        detail: "블록을 5~6개 높이로 쌓는다.",
        month_from: 20,
        month_to: 21,
        category: MilestoneCategory::FineMotor,
        is_core: true,
        prerequisite_id: Some("kdst_16_stack_3_blocks"),
    },
    Milestone {
        id: "kdst_20_sentence_2words",
        title: "두 단어 문장 완성",
        detail: "주어와 서술어가 포함된 두 단어 문장을 명확히 말한다 (예: 이거 뭐야?, 물 줘).",
        month_from: 20,
        month_to: 21,
        category: MilestoneCategory::Language,
        is_core: true,
        prerequisite_id: Some("kdst_18_two_word_phrases"),
    },
    Milestone {
        id: "kdst_20_parallel_play",
        title: "평행 놀이",
        detail: "또래 친구 옆에서 놀지만 같이 놀지는 않고 따로 논다.",
        month_from: 20,
        month_to: 21,
        category: MilestoneCategory::Social,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_20_zip_unzip",
        title: "지퍼 내리기",
        detail: "옷이나 가방의 지퍼를 혼자서 내릴 수 있다.",
        month_from: 20,
        month_to: 21,
        category: MilestoneCategory::SelfHelp,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_22_throw_overhand",
        title: "머리 위로 공 던지기",
        detail: "팔을 어깨 위로 들어 공을 앞으로 던진다.",
        month_from: 22,
        month_to: 23,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_22_turn_page_one",
        title: "책장 한 장씩 넘기기",
        detail: "책장을 한 번에 한 장씩 넘긴다.",
        month_from: 22,
        month_to: 23,
        category: MilestoneCategory::FineMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_22_follow_2step",
        title: "2단계 지시 수행",
        detail: "'기저귀 가져와서 휴지통에 버려' 처럼 연속된 지시를 따른다.",
        month_from: 22,
        month_to: 23,
        category: MilestoneCategory::Language,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_22_spoon_proficient",
        title: "숟가락질 능숙",
        detail: "숟가락을 바르게 쥐고 흘리지 않고 잘 먹는다.",
        month_from: 22,
        month_to: 23,
        category: MilestoneCategory::SelfHelp,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_24_stairs_alone",
        title: "계단 혼자 오르기",
        detail: "난간을 잡지 않고도 계단을 올라갈 수 있다.",
        month_from: 24,
        month_to: 26,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: Some("kdst_18_stairs_held"),
    },
    Milestone {
        id: "kdst_24_vertical_line",
        title: "수직선 따라 그리기",
        detail: "수직선을 보여주면 비슷하게 위아래로 그린다.",
        month_from: 24,
        month_to: 26,
        category: MilestoneCategory::FineMotor,
        is_core: true,
        prerequisite_id: Some("kdst_18_draw_line"),
    },
    Milestone {
        id: "kdst_24_pronoun_me",
        title: "대명사 사용 (나, 내꺼)",
        detail: "자신을 '나', '내 것'으로 표현한다.",
        month_from: 24,
        month_to: 26,
        category: MilestoneCategory::Language,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_24_wash_hands",
        title: "손 씻고 닦기",
        detail: "도움을 받아 비누로 손을 씻고 수건으로 닦는다.",
        month_from: 24,
        month_to: 26,
        category: MilestoneCategory::SelfHelp,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_24_pants_off",
        title: "바지/팬티 벗기",
        detail: "고무줄 바지나 팬티를 혼자서 벗는다.",
        month_from: 24,
        month_to: 26,
        category: MilestoneCategory::SelfHelp,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_27_jump_forward",
        title: "멀리 뛰기",
        detail: "제자리가 아닌 앞으로 깡충 뛰어 나간다.",
        month_from: 27,
        month_to: 29,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: Some("kdst_20_jump_place"),
    },
    Milestone {
        id: "kdst_27_stack_8_blocks",
        title: "블록 8개 쌓기",
        detail: "작은 블록을 8개 이상 높이 쌓는다.",
        month_from: 27,
        month_to: 29,
        category: MilestoneCategory::FineMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_27_prepositions",
        title: "위치어 이해 (위/아래)",
        detail: "'의자 위에', '상자 안에' 같은 위치 개념을 이해한다.",
        month_from: 27,
        month_to: 29,
        category: MilestoneCategory::Language,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_27_short_sentence",
        title: "3단어 문장",
        detail: "3개 이상의 단어를 연결하여 문장으로 말한다.",
        month_from: 27,
        month_to: 29,
        category: MilestoneCategory::Language,
        is_core: true,
        prerequisite_id: Some("kdst_20_sentence_2words"),
    },
    Milestone {
        id: "kdst_30_one_foot",
        title: "한 발 서기 (1초)",
        detail: "한 발로 1초 이상 중심을 잡고 서 있는다.",
        month_from: 30,
        month_to: 32,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_30_draw_circle",
        title: "원 그리기",
        detail: "원을 보여주면 둥그렇게 따라 그린다 (찌그러져도 됨).",
        month_from: 30,
        month_to: 32,
        category: MilestoneCategory::FineMotor,
        is_core: true,
        prerequisite_id: Some("kdst_24_vertical_line"),
    },
    Milestone {
        id: "kdst_30_ask_why",
        title: "질문하기 (왜?)",
        detail: "'이게 뭐야?', '왜?' 같은 질문을 자주 한다.",
        month_from: 30,
        month_to: 32,
        category: MilestoneCategory::Language,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_30_button",
        title: "큰 단추 끼우기",
        detail: "지름 2cm 정도의 큰 단추를 단춧구멍에 끼운다.",
        month_from: 30,
        month_to: 32,
        category: MilestoneCategory::FineMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_33_tricycle",
        title: "세발 자전거 타기",
        detail: "페달을 밟아서 세발 자전거를 앞으로 운전한다.",
        month_from: 33,
        month_to: 35,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_33_role_play",
        title: "역할 놀이",
        detail: "의사 놀이, 소꿉 놀이 등 역할을 맡아 놀이를 한다.",
        month_from: 33,
        month_to: 35,
        category: MilestoneCategory::Social,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_33_count_three",
        title: "수 개념 (셋까지)",
        detail: "물건을 하나, 둘, 셋까지 셀 수 있다.",
        month_from: 33,
        month_to: 35,
        category: MilestoneCategory::Cognitive,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_33_coat_on",
        title: "점퍼/외투 입기",
        detail: "도와주지 않아도 혼자서 외투를 입는다.",
        month_from: 33,
        month_to: 35,
        category: MilestoneCategory::SelfHelp,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_36_stairs_alternate",
        title: "발 바꿔 계단 오르기",
        detail: "한 발에 한 계단씩 번갈아 가며 계단을 오른다.",
        month_from: 36,
        month_to: 41,
        category: MilestoneCategory::GrossMotor,
        is_core: true,
        prerequisite_id: Some("kdst_24_stairs_alone"),
    },
    Milestone {
        id: "kdst_36_draw_cross",
        title: "십자가 그리기",
        detail: "십자가(+) 모양을 보고 따라 그린다.",
        month_from: 36,
        month_to: 41,
        category: MilestoneCategory::FineMotor,
        is_core: true,
        prerequisite_id: Some("kdst_30_draw_circle"),
    },
    Milestone {
        id: "kdst_36_full_sentence",
        title: "완전한 문장 구사",
        detail: "조사(~가, ~를)를 정확히 사용하여 문장을 말한다.",
        month_from: 36,
        month_to: 41,
        category: MilestoneCategory::Language,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_36_toilet_train",
        title: "소변 가리기",
        detail: "낮 동안 기저귀 없이 화장실에서 소변을 본다.",
        month_from: 36,
        month_to: 41,
        category: MilestoneCategory::SelfHelp,
        is_core: true,
        prerequisite_id: None,
    },
    Milestone {
        id: "kdst_36_coop_play",
        title: "규칙 있는 놀이",
        detail: "순서를 지키거나 간단한 규칙이 있는 게임을 친구와 한다.",
        month_from: 36,
        month_to: 41,
        category: MilestoneCategory::Social,
        is_core: true,
        prerequisite_id: None,
    },
];
