//! Hover effects on the skills list.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillHover {
    /// Never hovered: no inline style at all.
    #[default]
    Untouched,
    Hovered,
    Resting,
}

impl SkillHover {
    pub fn enter(&mut self) {
        *self = SkillHover::Hovered;
    }

    pub fn leave(&mut self) {
        *self = SkillHover::Resting;
    }

    pub fn inline(self) -> &'static str {
        match self {
            SkillHover::Untouched => "",
            SkillHover::Hovered => {
                "transform: translateX(10px) scale(1.05); background: linear-gradient(45deg, #3498db, #2ecc71); color: white;"
            }
            SkillHover::Resting => "transform: translateX(0) scale(1); background: white; color: #333;",
        }
    }
}
