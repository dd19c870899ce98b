//! Static collections each screen starts from. `achq init` writes them to the store.

use crate::model::{Achievement, PersonRef, ProjectRef, ReviewProject};
use chrono::NaiveDate;

fn day(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn person(id: &str, name: &str) -> PersonRef {
    PersonRef {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn project(id: &str, name: &str) -> Option<ProjectRef> {
    Some(ProjectRef {
        id: id.to_string(),
        name: name.to_string(),
    })
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    description: &str,
    kind: &str,
    status: &str,
    date: Option<NaiveDate>,
    level: &str,
    author: PersonRef,
    project: Option<ProjectRef>,
) -> Achievement {
    Achievement {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        kind: kind.to_string(),
        status: status.to_string(),
        date,
        level: level.to_string(),
        author,
        project,
    }
}

#[rustfmt::skip]
pub fn achievements() -> Vec<Achievement> {
    let zhang = || person("1", "张明");
    let li = || person("2", "李华");
    let wang = || person("3", "王芳");
    let nsfc = || project("p1", "国家自然科学基金面上项目");
    let key = || project("p2", "省重点研发计划");

    vec![
        entry("1", "基于深度学习的医学影像分割方法研究", "提出一种多尺度注意力分割网络，在公开数据集上取得领先结果", "学术论文", "已发表", day(2023, 3, 15), "国际级", zhang(), nsfc()),
        entry("2", "Graph Neural Networks for Drug Discovery", "A survey of graph learning methods for molecular property prediction", "学术论文", "已发表", day(2022, 11, 2), "国际级", li(), nsfc()),
        entry("3", "区域创新生态系统演化机理", "面向区域产业政策的实证分析", "学术论文", "审核中", None, "省部级", wang(), None),
        entry("4", "智能制造系统导论", "面向研究生的智能制造教材", "学术著作", "已出版", day(2021, 9, 1), "国家级", zhang(), key()),
        entry("5", "数据要素市场理论与实践", "数据要素定价与流通机制专著", "学术著作", "已出版", day(2022, 6, 20), "行业级", wang(), None),
        entry("6", "一种低功耗无线传感节点及其组网方法", "发明专利，已进入实质审查", "专利", "审查中", None, "国家级", li(), key()),
        entry("7", "可折叠式手术器械支架", "实用新型专利", "专利", "已授权", day(2023, 1, 10), "国家级", zhang(), None),
        entry("8", "省科学技术进步奖二等奖", "面向城市交通的多源数据融合平台", "获奖", "已获奖", day(2022, 12, 28), "省部级", li(), key()),
        entry("9", "校级优秀教学成果奖", "研究生课程思政教学改革", "获奖", "已获奖", day(2023, 7, 5), "校级", wang(), None),
        entry("10", "高精度北斗定位终端成果鉴定", "经专家鉴定达到国内领先水平", "成果鉴定", "已鉴定", day(2021, 4, 18), "市厅级", zhang(), nsfc()),
        entry("11", "Federated Learning under Label Skew", "Client drift correction for non-iid data", "学术论文", "已发表", day(2024, 2, 29), "国际级", li(), None),
        entry("12", "乡村振兴中的数字治理", "案例研究报告", "学术论文", "已发表", day(2023, 10, 8), "市厅级", wang(), None),
    ]
}

#[allow(clippy::too_many_arguments)]
fn review(
    id: &str,
    name: &str,
    description: &str,
    kind: &str,
    status: &str,
    date: Option<NaiveDate>,
    applicant: PersonRef,
    department: &str,
) -> ReviewProject {
    ReviewProject {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        kind: kind.to_string(),
        status: status.to_string(),
        date,
        applicant,
        department: department.to_string(),
    }
}

#[rustfmt::skip]
pub fn meeting_reviews() -> Vec<ReviewProject> {
    vec![
        review("m1", "新型降压药物II期临床试验", "多中心随机双盲对照试验", "初始审查", "待审查", day(2024, 3, 12), person("11", "陈静"), "心内科"),
        review("m2", "儿童哮喘队列随访研究", "前瞻性队列，涉及未成年人", "初始审查", "审查中", day(2024, 3, 12), person("12", "刘洋"), "儿科"),
        review("m3", "肿瘤组织样本库建设", "生物样本采集与二次使用", "初始审查", "已通过", day(2024, 2, 20), person("13", "赵磊"), "肿瘤科"),
        review("m4", "心理干预对术后康复的影响", "行为干预研究", "复审", "需修改", None, person("14", "孙悦"), "心理科"),
        review("m5", "基因检测辅助诊断研究", "遗传信息隐私保护方案待补充", "初始审查", "待审查", None, person("11", "陈静"), "检验科"),
    ]
}

#[rustfmt::skip]
pub fn track_reviews() -> Vec<ReviewProject> {
    vec![
        review("t1", "新型降压药物II期临床试验", "方案第3版修正", "修正案审查", "待审查", day(2024, 4, 1), person("11", "陈静"), "心内科"),
        review("t2", "肿瘤组织样本库建设", "年度进展报告", "年度/定期审查", "已通过", day(2024, 1, 15), person("13", "赵磊"), "肿瘤科"),
        review("t3", "儿童哮喘队列随访研究", "发生一例严重不良事件", "安全性信息审查", "审查中", day(2024, 3, 28), person("12", "刘洋"), "儿科"),
        review("t4", "糖尿病足创面修复研究", "入组标准偏离", "偏离方案报告", "待审查", None, person("15", "周婷"), "内分泌科"),
        review("t5", "针刺镇痛机制研究", "研究提前终止", "暂停/终止研究报告", "已通过", day(2023, 12, 5), person("16", "吴刚"), "中医科"),
        review("t6", "老年认知筛查工具验证", "研究完成，提交结题报告", "结题审查", "审查中", day(2024, 2, 2), person("14", "孙悦"), "神经内科"),
    ]
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A minimal achievement. The author id is `a<id>` so each record has its own.
    pub fn achievement(
        id: &str,
        kind: &str,
        name: &str,
        date: Option<&str>,
        level: &str,
    ) -> Achievement {
        Achievement {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            kind: kind.to_string(),
            status: "已发表".to_string(),
            date: date.map(|d| {
                NaiveDate::parse_from_str(d, "%Y-%m-%d").expect("fixture dates are valid")
            }),
            level: level.to_string(),
            author: person(&format!("a{id}"), "Author"),
            project: None,
        }
    }
}
