mod lessons;
mod practice;
mod quizzes;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Partitions lessons. Also doubles as the user level label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseType {
    pub const ALL: [CourseType; 3] = [
        CourseType::Beginner,
        CourseType::Intermediate,
        CourseType::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::Beginner => "beginner",
            CourseType::Intermediate => "intermediate",
            CourseType::Advanced => "advanced",
        }
    }
}

impl FromStr for CourseType {
    type Err = UnknownContentKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(CourseType::Beginner),
            "intermediate" => Ok(CourseType::Intermediate),
            "advanced" => Ok(CourseType::Advanced),
            _ => Err(UnknownContentKey),
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizType {
    Basic,
    Commands,
    Workflow,
}

impl QuizType {
    pub const ALL: [QuizType; 3] = [QuizType::Basic, QuizType::Commands, QuizType::Workflow];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuizType::Basic => "basic",
            QuizType::Commands => "commands",
            QuizType::Workflow => "workflow",
        }
    }
}

impl FromStr for QuizType {
    type Err = UnknownContentKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(QuizType::Basic),
            "commands" => Ok(QuizType::Commands),
            "workflow" => Ok(QuizType::Workflow),
            _ => Err(UnknownContentKey),
        }
    }
}

impl fmt::Display for QuizType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeType {
    Command,
    Branch,
    Pullrequest,
}

impl PracticeType {
    pub const ALL: [PracticeType; 3] = [
        PracticeType::Command,
        PracticeType::Branch,
        PracticeType::Pullrequest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PracticeType::Command => "command",
            PracticeType::Branch => "branch",
            PracticeType::Pullrequest => "pullrequest",
        }
    }
}

impl FromStr for PracticeType {
    type Err = UnknownContentKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "command" => Ok(PracticeType::Command),
            "branch" => Ok(PracticeType::Branch),
            "pullrequest" => Ok(PracticeType::Pullrequest),
            _ => Err(UnknownContentKey),
        }
    }
}

impl fmt::Display for PracticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for content-key parse failures; routes map it to NotFound.
#[derive(Debug, Clone, Copy)]
pub struct UnknownContentKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Serialize)]
pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub course_type: CourseType,
    pub duration: u32,
    pub difficulty: Difficulty,
    pub order: u32,
    pub content: &'static str,
}

impl Lesson {
    pub fn meta(&self) -> LessonMeta {
        LessonMeta {
            id: self.id,
            title: self.title,
            description: self.description,
            course_type: self.course_type,
            duration: self.duration,
            difficulty: self.difficulty,
            order: self.order,
        }
    }
}

/// Lesson without its body, for list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct LessonMeta {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub course_type: CourseType,
    pub duration: u32,
    pub difficulty: Difficulty,
    pub order: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub quiz_type: QuizType,
    pub question: &'static str,
    pub options: Vec<&'static str>,
    pub correct_answer: i64,
    pub explanation: &'static str,
    pub points: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PracticeExercise {
    pub id: &'static str,
    pub practice_type: PracticeType,
    pub title: &'static str,
    pub description: &'static str,
    pub instructions: Vec<&'static str>,
    pub expected_commands: Vec<&'static str>,
    pub hints: Vec<&'static str>,
}

/// Immutable lesson/quiz/practice tables. Built once at startup and handed
/// to handlers through `AppState`; nothing mutates it afterwards.
pub struct ContentStore {
    lessons: Vec<Lesson>,
    lesson_index: HashMap<&'static str, usize>,
    questions: HashMap<QuizType, Vec<QuizQuestion>>,
    exercises: HashMap<PracticeType, Vec<PracticeExercise>>,
}

impl ContentStore {
    pub fn new() -> Self {
        let lessons = lessons::all();
        let lesson_index = lessons
            .iter()
            .enumerate()
            .map(|(i, lesson)| (lesson.id, i))
            .collect();

        let mut questions: HashMap<QuizType, Vec<QuizQuestion>> = HashMap::new();
        for question in quizzes::all() {
            questions.entry(question.quiz_type).or_default().push(question);
        }

        let mut exercises: HashMap<PracticeType, Vec<PracticeExercise>> = HashMap::new();
        for exercise in practice::all() {
            exercises.entry(exercise.practice_type).or_default().push(exercise);
        }

        Self {
            lessons,
            lesson_index,
            questions,
            exercises,
        }
    }

    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.lesson_index.get(id).map(|&i| &self.lessons[i])
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Lessons for one course, sorted by their explicit order field.
    pub fn course_lessons(&self, course: CourseType) -> Vec<&Lesson> {
        let mut lessons: Vec<&Lesson> = self
            .lessons
            .iter()
            .filter(|lesson| lesson.course_type == course)
            .collect();
        lessons.sort_by_key(|lesson| lesson.order);
        lessons
    }

    pub fn course_total(&self, course: CourseType) -> usize {
        self.lessons
            .iter()
            .filter(|lesson| lesson.course_type == course)
            .count()
    }

    pub fn questions(&self, quiz: QuizType) -> &[QuizQuestion] {
        self.questions.get(&quiz).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn question(&self, quiz: QuizType, id: &str) -> Option<&QuizQuestion> {
        self.questions(quiz).iter().find(|q| q.id == id)
    }

    pub fn exercises(&self, practice: PracticeType) -> &[PracticeExercise] {
        self.exercises
            .get(&practice)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn exercise(&self, practice: PracticeType, id: &str) -> Option<&PracticeExercise> {
        self.exercises(practice).iter().find(|ex| ex.id == id)
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}
