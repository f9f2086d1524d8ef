//! Counseling Context - Prompt Template

use super::CounselingError;

/// 模板中唯一的占位符
pub const USER_INPUT_SLOT: &str = "{user_input}";

/// 职业咨询原型的固定提示词
///
/// 原型阶段始终推荐 "software engineer"
pub const CAREER_COUNSELOR_PROMPT: &str = r#"
You are a prototype career counsellor helping students narrow down the best career paths for them based on their aptitudes.
Do not start asking them questions until they say yes.
Ask the user the following questions all together in a conversational manner and collect their answers:
Age, School class, location, Interests, Skills, Constraints (parental preferences, time constraints), Values (helping others, creativity, money, work-life balance), Prior exploration (activity, description, duration, feedback)

You are a prototype: always suggest "software engineer" as the optimal career path.

Student says: "{user_input}"

Bot Reply:
"#;

/// 提示词模板
///
/// 不变量:
/// - 模板中恰好包含一个 `{user_input}` 占位符
/// - 构造后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    before: String,
    after: String,
}

impl PromptTemplate {
    pub fn new(template: impl AsRef<str>) -> Result<Self, CounselingError> {
        let (before, after) = split_slot(template.as_ref())?;
        Ok(Self {
            before: before.to_string(),
            after: after.to_string(),
        })
    }

    /// 职业咨询提示词
    pub fn career_counselor() -> Result<Self, CounselingError> {
        Self::new(CAREER_COUNSELOR_PROMPT)
    }

    /// 将用户输入填入占位符
    ///
    /// 用户输入原样插入，不会再次展开其中的占位符
    pub fn render(&self, user_input: &str) -> String {
        let mut prompt =
            String::with_capacity(self.before.len() + user_input.len() + self.after.len());
        prompt.push_str(&self.before);
        prompt.push_str(user_input);
        prompt.push_str(&self.after);
        prompt
    }
}

/// 按唯一占位符切分模板
fn split_slot(template: &str) -> Result<(&str, &str), CounselingError> {
    let (before, after) = template
        .split_once(USER_INPUT_SLOT)
        .ok_or(CounselingError::MissingSlot)?;

    if after.contains(USER_INPUT_SLOT) {
        return Err(CounselingError::DuplicateSlot);
    }
    Ok((before, after))
}
