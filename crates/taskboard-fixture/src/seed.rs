// Seed data for the fixture application.
//
// The data set is fixed: scenario suites key on these titles and counts.
// Changing a title here means checking which scenarios search for it.

use serde::{Deserialize, Serialize};

/// Task lifecycle status. `Backlog` renders in the "To Do" board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Backlog,
    InProgress,
    Done,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Backlog, Status::InProgress, Status::Done];

    /// Value used in `<select>` options and in the seed JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Backlog => "Backlog",
            Status::InProgress => "InProgress",
            Status::Done => "Done",
        }
    }

    /// Column header shown on the board.
    pub fn column_label(&self) -> &'static str {
        match self {
            Status::Backlog => "To Do",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// A project; its board is reachable at `/board/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub project_id: u32,
    pub status: Status,
    pub priority: Priority,
    pub assignee: String,
}

/// The complete fixture data set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    pub projects: Vec<Project>,
    pub users: Vec<String>,
    pub tasks: Vec<Task>,
}

impl Seed {
    /// The canonical data set served by the fixture.
    ///
    /// Shape the suites depend on:
    /// - three task titles contain "Оптимизация" (case-insensitive search);
    /// - board 1 has at least one task in every column;
    /// - "Реализация темной темы" exists (substring search "темной");
    /// - one title contains "загрузка" verbatim (board-filter search);
    /// - the "Редизайн карточки товара" project has its own "Редизайн…" tasks.
    pub fn demo() -> Self {
        let projects = vec![
            project(1, "Рефакторинг API"),
            project(2, "Оптимизация производительности"),
            project(3, "Переход на Kubernetes"),
            project(4, "Редизайн карточки товара"),
        ];
        let users = vec![
            "Илья Романов".to_string(),
            "Дмитрий Козлов".to_string(),
            "Ольга Новикова".to_string(),
            "Максим Орлов".to_string(),
            "Анна Соколова".to_string(),
            "Елена Васильева".to_string(),
        ];
        let tasks = vec![
            Task {
                id: 1,
                title: "Рефакторинг эндпоинтов авторизации".to_string(),
                description: Some("Привести ответы к единому формату".to_string()),
                project_id: 1,
                status: Status::InProgress,
                priority: Priority::High,
                assignee: "Дмитрий Козлов".to_string(),
            },
            Task {
                id: 2,
                title: "Оптимизация SQL-запросов списка заказов".to_string(),
                description: None,
                project_id: 1,
                status: Status::Backlog,
                priority: Priority::Medium,
                assignee: "Ольга Новикова".to_string(),
            },
            Task {
                id: 3,
                title: "Версионирование публичного API".to_string(),
                description: None,
                project_id: 1,
                status: Status::Done,
                priority: Priority::Low,
                assignee: "Илья Романов".to_string(),
            },
            Task {
                id: 4,
                title: "Документация по новым эндпоинтам".to_string(),
                description: None,
                project_id: 1,
                status: Status::Done,
                priority: Priority::Medium,
                assignee: "Анна Соколова".to_string(),
            },
            Task {
                id: 5,
                title: "Оптимизация загрузки главной страницы".to_string(),
                description: Some("Сократить LCP до 2,5 секунд".to_string()),
                project_id: 2,
                status: Status::InProgress,
                priority: Priority::High,
                assignee: "Илья Романов".to_string(),
            },
            Task {
                id: 6,
                title: "Оптимизация бандла фронтенда".to_string(),
                description: None,
                project_id: 2,
                status: Status::Backlog,
                priority: Priority::Medium,
                assignee: "Максим Орлов".to_string(),
            },
            Task {
                id: 7,
                title: "Кэширование статики на CDN".to_string(),
                description: None,
                project_id: 2,
                status: Status::Done,
                priority: Priority::High,
                assignee: "Елена Васильева".to_string(),
            },
            Task {
                id: 8,
                title: "Ленивая загрузка изображений".to_string(),
                description: None,
                project_id: 2,
                status: Status::Backlog,
                priority: Priority::Low,
                assignee: "Анна Соколова".to_string(),
            },
            Task {
                id: 9,
                title: "Миграция сервисов в кластер".to_string(),
                description: None,
                project_id: 3,
                status: Status::InProgress,
                priority: Priority::High,
                assignee: "Максим Орлов".to_string(),
            },
            Task {
                id: 10,
                title: "Настройка автоскейлинга".to_string(),
                description: None,
                project_id: 3,
                status: Status::Backlog,
                priority: Priority::Medium,
                assignee: "Илья Романов".to_string(),
            },
            Task {
                id: 11,
                title: "Перенос секретов в Vault".to_string(),
                description: None,
                project_id: 3,
                status: Status::Done,
                priority: Priority::Medium,
                assignee: "Ольга Новикова".to_string(),
            },
            Task {
                id: 12,
                title: "Редизайн блока отзывов".to_string(),
                description: None,
                project_id: 4,
                status: Status::InProgress,
                priority: Priority::Medium,
                assignee: "Анна Соколова".to_string(),
            },
            Task {
                id: 13,
                title: "Реализация темной темы".to_string(),
                description: Some("Палитра и переключатель в настройках".to_string()),
                project_id: 4,
                status: Status::Backlog,
                priority: Priority::High,
                assignee: "Елена Васильева".to_string(),
            },
            Task {
                id: 14,
                title: "Редизайн галереи изображений".to_string(),
                description: None,
                project_id: 4,
                status: Status::Done,
                priority: Priority::Low,
                assignee: "Максим Орлов".to_string(),
            },
        ];
        Seed {
            projects,
            users,
            tasks,
        }
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn tasks_for_project(&self, project_id: u32) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.project_id == project_id)
    }
}

fn project(id: u32, name: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_one_has_every_column_populated() {
        let seed = Seed::demo();
        for status in Status::ALL {
            assert!(
                seed.tasks_for_project(1).any(|t| t.status == status),
                "board 1 is missing a {status:?} task"
            );
        }
    }

    #[test]
    fn every_task_belongs_to_exactly_one_project_and_status() {
        let seed = Seed::demo();
        for task in &seed.tasks {
            assert!(seed.project(task.project_id).is_some(), "task {} is orphaned", task.id);
            assert!(seed.users.contains(&task.assignee));
        }
        let mut ids: Vec<u32> = seed.tasks.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), seed.tasks.len(), "duplicate task ids");
    }

    #[test]
    fn search_vocabulary_is_present() {
        let seed = Seed::demo();
        let matching = |needle: &str| {
            seed.tasks
                .iter()
                .filter(|t| t.title.to_lowercase().contains(&needle.to_lowercase()))
                .count()
        };
        assert_eq!(matching("Оптимизация"), 3);
        assert_eq!(matching("ОПТИМИЗАЦИЯ"), 3);
        assert_eq!(matching("темной"), 1);
        assert!(matching("загрузка") >= 1);
        assert!(matching("Редизайн") >= 2);
        assert_eq!(matching("Несуществующая задача xyz123"), 0);
    }

    #[test]
    fn seed_json_is_camel_case() {
        let seed = Seed::demo();
        let json = serde_json::to_value(&seed).expect("seed serializes");
        let task = &json["tasks"][0];
        assert_eq!(task["projectId"], 1);
        assert_eq!(task["status"], "InProgress");
    }
}
