// HTML for the three fixture routes.
//
// Pages are rendered server-side with behavior in inline scripts, the same
// shape as the pages the suite drives in production. The scripts run before
// the document's load event fires, so a navigation that waits for load
// always observes a fully rendered list.
//
// Markup contract (what the suite's selector groups rely on):
// - issues screen: `data-testid` attributes on list/cards/buttons, `name`
//   attributes on form controls, localized button labels;
// - board screen: class names and column headers only, no test ids;
// - projects screen: test ids on the list and cards, localized buttons.

use crate::seed::{Seed, Status};

const STYLE: &str = r#"<style>
  body { font-family: sans-serif; margin: 2rem; }
  [hidden] { display: none !important; }
  .modal { position: fixed; top: 10%; left: 50%; transform: translateX(-50%);
           background: #fff; border: 1px solid #ccc; padding: 1.5rem; min-width: 24rem; }
  .issue-card, .project-card, .task-card { border: 1px solid #ddd; padding: 0.6rem;
           margin: 0.4rem 0; cursor: pointer; }
  .board-columns { display: flex; gap: 1rem; }
  .board-column { flex: 1; background: #f6f6f6; padding: 0.6rem; }
  .issue-meta, .card-assignee, .project-count { color: #777; font-size: 0.8rem; display: block; }
</style>"#;

fn shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"ru\">\n<head><meta charset=\"utf-8\"><title>{}</title>{}</head>\n<body>\n{}\n</body>\n</html>",
        escape(title),
        STYLE,
        body
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// `/projects` — project cards, each with a board link.
pub fn projects(seed: &Seed) -> String {
    let mut cards = String::new();
    for project in &seed.projects {
        let count = seed.tasks_for_project(project.id).count();
        cards.push_str(&format!(
            r#"<div class="project-card" data-testid="project-card" onclick="location.href='/board/{id}'">
  <h3 class="project-title">{name}</h3>
  <span class="project-count">Задач: {count}</span>
  <button data-testid="go-to-board" onclick="event.stopPropagation(); location.href='/board/{id}'">Перейти к доске</button>
</div>
"#,
            id = project.id,
            name = escape(&project.name),
        ));
    }
    let body = format!(
        r#"<h1>Проекты</h1>
<div class="project-list" data-testid="projects-list">
{cards}</div>"#
    );
    shell("Проекты", &body)
}

/// `/issues` — searchable, filterable task list with the create and edit modals.
pub fn issues(seed: &Seed) -> String {
    let seed_json = serde_json::to_string(seed).expect("seed serializes");

    let mut board_options = String::from(r#"<option value="Все">Все</option>"#);
    for project in &seed.projects {
        let name = escape(&project.name);
        board_options.push_str(&format!(r#"<option value="{name}">{name}</option>"#));
    }
    let mut project_options = String::from(r#"<option value="">Выберите проект</option>"#);
    for project in &seed.projects {
        let name = escape(&project.name);
        project_options.push_str(&format!(r#"<option value="{name}">{name}</option>"#));
    }
    let mut assignee_options = String::from(r#"<option value="">Исполнитель</option>"#);
    for user in &seed.users {
        let name = escape(user);
        assignee_options.push_str(&format!(r#"<option value="{name}">{name}</option>"#));
    }

    let body = format!(
        r#"<header>
  <h1>Все задачи</h1>
  <button data-testid="create-issue-btn">Создать задачу</button>
</header>
<div class="filters">
  <input type="text" data-testid="search-input" placeholder="Поиск задач" />
  <select name="status" data-testid="status-filter">
    <option value="Все">Все</option>
    <option value="Backlog">Backlog</option>
    <option value="InProgress">InProgress</option>
    <option value="Done">Done</option>
  </select>
  <select name="board" data-testid="board-filter">{board_options}</select>
</div>
<div class="issue-list" data-testid="issues-list"></div>
<p class="no-issues" data-testid="no-issues" hidden>Задачи не найдены</p>

<div class="modal create-modal" role="dialog" data-testid="create-issue-modal" hidden>
  <h2>Создание задачи</h2>
  <input type="text" name="title" placeholder="Название задачи" />
  <textarea name="description" placeholder="Описание задачи"></textarea>
  <select name="project">{project_options}</select>
  <select name="priority">
    <option value="">Приоритет</option>
    <option value="Low">Low</option>
    <option value="Medium">Medium</option>
    <option value="High">High</option>
  </select>
  <input type="text" class="status-field" name="status" value="Backlog" disabled readonly />
  <select name="assignee">{assignee_options}</select>
  <div class="modal-actions">
    <button data-testid="create-btn" disabled>Создать</button>
    <button data-testid="cancel-btn">Отмена</button>
  </div>
</div>

{edit_modal}
<script>const SEED = {seed_json}; const SHOW_GO_TO_BOARD = true;</script>
<script>{list_script}</script>
<script>{modal_script}</script>"#,
        edit_modal = edit_modal_markup(true),
        list_script = ISSUES_LIST_SCRIPT,
        modal_script = EDIT_MODAL_SCRIPT,
    );
    shell("Все задачи", &body)
}

/// `/board/{id}` — one project's kanban board, or `None` for unknown ids.
pub fn board(seed: &Seed, board_id: u32) -> Option<String> {
    let project = seed.project(board_id)?;
    let seed_json = serde_json::to_string(seed).expect("seed serializes");

    let mut columns = String::new();
    for status in Status::ALL {
        columns.push_str(&format!(
            r#"<section class="board-column" data-column="{key}">
  <h2>{label}</h2>
  <div class="column-cards" data-column-cards="{key}"></div>
</section>
"#,
            key = status.as_str(),
            label = status.column_label(),
        ));
    }

    let body = format!(
        r#"<main class="kanban-board">
  <h1 class="board-title">{name}</h1>
  <div class="board-columns">
{columns}  </div>
</main>

{edit_modal}
<script>const SEED = {seed_json}; const BOARD_ID = {board_id}; const SHOW_GO_TO_BOARD = false;</script>
<script>{board_script}</script>
<script>{modal_script}</script>"#,
        name = escape(&project.name),
        edit_modal = edit_modal_markup(false),
        board_script = BOARD_SCRIPT,
        modal_script = EDIT_MODAL_SCRIPT,
    );
    Some(shell(&project.name, &body))
}

// The edit modal is shared by the issues and board screens; only the board
// navigation action differs (absent when the board is already open).
fn edit_modal_markup(with_go_to_board: bool) -> String {
    let go_to_board = if with_go_to_board {
        r#"<button data-testid="go-to-board-btn">Перейти на доску</button>
    "#
    } else {
        ""
    };
    format!(
        r#"<div class="modal edit-modal" role="dialog" data-testid="edit-issue-modal" hidden>
  <h2 class="task-title"></h2>
  <p class="task-description"></p>
  <dl>
    <dt>Проект</dt><dd class="task-project"></dd>
    <dt>Приоритет</dt><dd class="task-priority"></dd>
    <dt>Исполнитель</dt><dd class="task-assignee"></dd>
  </dl>
  <label>Статус
    <select name="status">
      <option value="Backlog">Backlog</option>
      <option value="InProgress">InProgress</option>
      <option value="Done">Done</option>
    </select>
  </label>
  <div class="modal-actions">
    {go_to_board}<button class="update-btn">Обновить</button>
    <button class="close-btn">Закрыть</button>
  </div>
</div>"#
    )
}

// Issues list rendering, search and filters. Runs synchronously at parse
// time so the list exists before the load event.
const ISSUES_LIST_SCRIPT: &str = r#"
let tasks = SEED.tasks.slice();
let nextId = Math.max(...tasks.map(t => t.id)) + 1;

const searchInput = document.querySelector('[data-testid="search-input"]');
const statusFilter = document.querySelector('[data-testid="status-filter"]');
const boardFilter = document.querySelector('[data-testid="board-filter"]');
const list = document.querySelector('[data-testid="issues-list"]');
const emptyMessage = document.querySelector('[data-testid="no-issues"]');

function projectName(id) {
  const p = SEED.projects.find(p => p.id === id);
  return p ? p.name : '';
}

function visibleTasks() {
  const query = searchInput.value.trim().toLowerCase();
  return tasks.filter(t => {
    if (query && !t.title.toLowerCase().includes(query)) return false;
    if (statusFilter.value !== 'Все' && t.status !== statusFilter.value) return false;
    if (boardFilter.value !== 'Все' && projectName(t.projectId) !== boardFilter.value) return false;
    return true;
  });
}

function renderList() {
  const visible = visibleTasks();
  list.textContent = '';
  for (const task of visible) {
    const card = document.createElement('div');
    card.className = 'issue-card';
    card.dataset.testid = 'issue-card';
    const title = document.createElement('span');
    title.className = 'issue-title';
    title.textContent = task.title;
    const meta = document.createElement('span');
    meta.className = 'issue-meta';
    meta.textContent = task.status + ' · ' + task.priority + ' · ' + task.assignee;
    card.append(title, meta);
    card.addEventListener('click', () => openEditModal(task));
    list.append(card);
  }
  emptyMessage.hidden = visible.length > 0;
}

searchInput.addEventListener('input', renderList);
statusFilter.addEventListener('change', renderList);
boardFilter.addEventListener('change', renderList);
renderList();

// Create modal
const createModal = document.querySelector('[data-testid="create-issue-modal"]');
const createBtn = document.querySelector('[data-testid="create-btn"]');
const cancelBtn = document.querySelector('[data-testid="cancel-btn"]');
const titleInput = createModal.querySelector('[name="title"]');
const descriptionInput = createModal.querySelector('[name="description"]');
const projectSelect = createModal.querySelector('[name="project"]');
const prioritySelect = createModal.querySelector('[name="priority"]');
const assigneeSelect = createModal.querySelector('[name="assignee"]');

function refreshCreateButton() {
  const complete = titleInput.value.trim() !== ''
    && projectSelect.value !== ''
    && prioritySelect.value !== ''
    && assigneeSelect.value !== '';
  createBtn.disabled = !complete;
}

for (const control of [titleInput, projectSelect, prioritySelect, assigneeSelect]) {
  control.addEventListener('input', refreshCreateButton);
  control.addEventListener('change', refreshCreateButton);
}

function resetCreateForm() {
  titleInput.value = '';
  descriptionInput.value = '';
  projectSelect.value = '';
  prioritySelect.value = '';
  assigneeSelect.value = '';
  refreshCreateButton();
}

document.querySelector('[data-testid="create-issue-btn"]').addEventListener('click', () => {
  createModal.hidden = false;
});
cancelBtn.addEventListener('click', () => {
  createModal.hidden = true;
  resetCreateForm();
});
createBtn.addEventListener('click', () => {
  const project = SEED.projects.find(p => p.name === projectSelect.value);
  tasks.push({
    id: nextId++,
    title: titleInput.value.trim(),
    description: descriptionInput.value.trim() || undefined,
    projectId: project ? project.id : 0,
    status: 'Backlog',
    priority: prioritySelect.value,
    assignee: assigneeSelect.value,
  });
  createModal.hidden = true;
  resetCreateForm();
  renderList();
});
"#;

// Board column rendering and status edits.
const BOARD_SCRIPT: &str = r#"
let tasks = SEED.tasks.filter(t => t.projectId === BOARD_ID);

function renderColumns() {
  for (const container of document.querySelectorAll('[data-column-cards]')) {
    const status = container.dataset.columnCards;
    container.textContent = '';
    for (const task of tasks.filter(t => t.status === status)) {
      const card = document.createElement('div');
      card.className = 'task-card';
      const title = document.createElement('span');
      title.className = 'card-title';
      title.textContent = task.title;
      const assignee = document.createElement('span');
      assignee.className = 'card-assignee';
      assignee.textContent = task.assignee;
      card.append(title, assignee);
      card.addEventListener('click', () => openEditModal(task));
      container.append(card);
    }
  }
}

renderColumns();
"#;

// Shared edit-modal behavior; the board redraws its columns after an update.
const EDIT_MODAL_SCRIPT: &str = r#"
const editModal = document.querySelector('[data-testid="edit-issue-modal"]');
const statusSelect = editModal.querySelector('[name="status"]');
let editedTask = null;

function openEditModal(task) {
  editedTask = task;
  editModal.querySelector('.task-title').textContent = task.title;
  editModal.querySelector('.task-description').textContent = task.description || '';
  editModal.querySelector('.task-project').textContent =
    (SEED.projects.find(p => p.id === task.projectId) || { name: '' }).name;
  editModal.querySelector('.task-priority').textContent = task.priority;
  editModal.querySelector('.task-assignee').textContent = task.assignee;
  statusSelect.value = task.status;
  editModal.hidden = false;
}

function closeEditModal() {
  editModal.hidden = true;
  editedTask = null;
}

editModal.querySelector('.update-btn').addEventListener('click', () => {
  if (editedTask) {
    editedTask.status = statusSelect.value;
  }
  closeEditModal();
  if (typeof renderColumns === 'function') renderColumns();
  if (typeof renderList === 'function') renderList();
});
editModal.querySelector('.close-btn').addEventListener('click', closeEditModal);
document.addEventListener('keydown', event => {
  if (event.key === 'Escape') closeEditModal();
});

if (SHOW_GO_TO_BOARD) {
  document.querySelector('[data-testid="go-to-board-btn"]').addEventListener('click', () => {
    if (editedTask) location.href = '/board/' + editedTask.projectId;
  });
}
"#;
