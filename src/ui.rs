use crate::catalog::{Role, Task};
use crate::clock::long_date;
use crate::progress::Progress;
use std::collections::BTreeSet;
use std::fmt::Write;

/// How long the celebration overlay stays up after a task is marked done.
pub const CELEBRATION_MS: u32 = 2000;

pub struct IndexView<'a> {
    pub date: &'a str,
    pub completed: &'a BTreeSet<String>,
    pub progress: Progress,
    pub tasks: &'a [Task],
    pub roles: &'a [Role],
    pub celebrate: bool,
}

pub fn render_index(view: &IndexView<'_>) -> String {
    let progress = view.progress;
    let (trophy, status) = if progress.is_fully_complete {
        ("🏆", "Achieved")
    } else {
        ("🎯", "In Progress")
    };
    let banner_hidden = if progress.is_fully_complete { "" } else { "hidden" };

    INDEX_HTML
        .replace("{{LONG_DATE}}", &long_date(view.date))
        .replace("{{DATE}}", view.date)
        .replace("{{COMPLETED}}", &progress.completed_count.to_string())
        .replace("{{TOTAL}}", &progress.total.to_string())
        .replace("{{PERCENT}}", &progress.percent.to_string())
        .replace("{{MASCOT}}", if progress.is_fully_complete { "🏆" } else { "🐝" })
        .replace("{{BANNER_HIDDEN}}", banner_hidden)
        .replace("{{TASKS}}", &render_tasks(view.tasks, view.completed))
        .replace("{{ROLES}}", &render_roles(view.roles))
        .replace("{{TROPHY}}", trophy)
        .replace("{{STATUS}}", status)
        .replace("{{CELEBRATE}}", if view.celebrate { "show" } else { "" })
        .replace("{{CELEBRATION_MS}}", &CELEBRATION_MS.to_string())
}

fn render_tasks(tasks: &[Task], completed: &BTreeSet<String>) -> String {
    let mut html = String::new();
    for task in tasks {
        let done = completed.contains(task.id);
        let streak = if task.streak {
            r#"<span class="pill pill-daily">Daily</span>"#
        } else {
            ""
        };
        let _ = write!(
            html,
            r#"
      <article class="task{done_class}" data-task="{id}">
        <div class="task-head">
          <span class="task-icon">{icon}</span>
          <div>
            <h3>{title}</h3>
            <div class="pills">{streak}<span class="pill">{category}</span></div>
            <p>{description}</p>
          </div>
        </div>
        <div class="task-actions">
          <a href="{link}" target="_blank" rel="noopener noreferrer">Open ↗</a>
          <form method="post" action="/tasks/{id}/toggle" data-toggle="{id}">
            <button type="submit">{label}</button>
          </form>
        </div>
      </article>"#,
            done_class = if done { " done" } else { "" },
            id = task.id,
            icon = if done { "✔" } else { "•" },
            title = task.title,
            category = task.category,
            description = task.description,
            link = task.link,
            label = if done { "Completed" } else { "Mark Done" },
        );
    }
    html
}

fn render_roles(roles: &[Role]) -> String {
    let mut html = String::new();
    for role in roles {
        let links: String = role
            .links
            .iter()
            .map(|link| {
                format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer">↗ {}</a>"#,
                    link.url, link.name
                )
            })
            .collect();
        let _ = write!(
            html,
            r#"
      <article class="role" data-role="{id}">
        <span class="role-badge" style="background: linear-gradient(135deg, {from}, {to});"></span>
        <h3>{title}</h3>
        <p>{description}</p>
        <div class="links">{links}</div>
      </article>"#,
            id = role.id,
            from = role.colors.0,
            to = role.colors.1,
            title = role.title,
            description = role.description,
        );
    }
    html
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>BeeLiever Diary</title>
  <style>
    :root {
      --bg: #f9fafb;
      --ink: #111827;
      --muted: #4b5563;
      --card: #ffffff;
      --line: #e5e7eb;
      --honey-1: #facc15;
      --honey-2: #f97316;
      --done: #22c55e;
      --link: #2563eb;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: system-ui, "Segoe UI", sans-serif;
    }

    header.top {
      background: var(--card);
      border-bottom: 1px solid var(--line);
    }

    .wrap {
      max-width: 1100px;
      margin: 0 auto;
      padding: 24px 20px;
      display: grid;
      gap: 28px;
    }

    .brand {
      display: flex;
      align-items: center;
      justify-content: space-between;
      flex-wrap: wrap;
      gap: 16px;
    }

    .brand h1 {
      margin: 0 0 4px;
      font-size: clamp(1.5rem, 3vw, 2rem);
    }

    .brand p {
      margin: 0;
      color: var(--muted);
    }

    .badge {
      background: #fef9c3;
      color: #854d0e;
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.9rem;
      font-weight: 500;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 24px;
      padding: 28px;
    }

    .progress-head {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
      margin-bottom: 20px;
    }

    .progress-head h2 {
      margin: 0 0 6px;
    }

    .percent {
      font-size: 2rem;
      font-weight: 700;
    }

    .mascot {
      width: 60px;
      height: 60px;
      border-radius: 16px;
      display: grid;
      place-items: center;
      font-size: 1.6rem;
      background: linear-gradient(135deg, var(--honey-1), var(--honey-2));
    }

    .bar {
      height: 12px;
      border-radius: 999px;
      background: var(--line);
      overflow: hidden;
    }

    .bar > div {
      height: 100%;
      background: linear-gradient(90deg, var(--honey-1), var(--honey-2));
      transition: width 500ms ease;
    }

    .banner {
      margin-top: 20px;
      border: 1px solid #fde68a;
      background: linear-gradient(90deg, #fefce8, #fff7ed);
      border-radius: 18px;
      padding: 20px;
      text-align: center;
    }

    .banner[hidden] {
      display: none;
    }

    .grid {
      display: grid;
      gap: 20px;
      grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    }

    .task,
    .role {
      background: var(--card);
      border: 2px solid var(--line);
      border-radius: 20px;
      padding: 22px;
      display: grid;
      gap: 16px;
    }

    .task.done {
      border-color: #bbf7d0;
      background: #f0fdf4;
    }

    .task-head {
      display: flex;
      gap: 14px;
    }

    .task-head h3,
    .role h3 {
      margin: 0 0 6px;
    }

    .task-head p,
    .role p {
      margin: 8px 0 0;
      color: var(--muted);
      font-size: 0.9rem;
      line-height: 1.5;
    }

    .task-icon {
      width: 44px;
      height: 44px;
      flex-shrink: 0;
      border-radius: 12px;
      display: grid;
      place-items: center;
      background: #f3f4f6;
    }

    .task.done .task-icon {
      background: var(--done);
      color: #fff;
    }

    .pills {
      display: flex;
      gap: 8px;
    }

    .pill {
      font-size: 0.75rem;
      padding: 3px 9px;
      border-radius: 999px;
      background: #f3f4f6;
      color: var(--muted);
    }

    .pill-daily {
      background: #ffedd5;
      color: #9a3412;
    }

    .task-actions {
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    a {
      color: var(--link);
      text-decoration: none;
      font-size: 0.9rem;
    }

    button {
      border: none;
      border-radius: 12px;
      padding: 10px 18px;
      font-weight: 500;
      cursor: pointer;
      background: #e5e7eb;
      color: #374151;
    }

    .task.done button {
      background: var(--done);
      color: #fff;
    }

    .role-badge {
      width: 44px;
      height: 44px;
      border-radius: 12px;
    }

    .links {
      display: grid;
      gap: 6px;
    }

    .summary {
      display: grid;
      grid-template-columns: 1fr 1fr;
      text-align: center;
    }

    .summary strong {
      display: block;
      font-size: 1.8rem;
      margin: 8px 0 4px;
    }

    .summary span {
      color: var(--muted);
    }

    .celebration {
      position: fixed;
      inset: 0;
      display: none;
      place-items: center;
      pointer-events: none;
      font-size: 3rem;
    }

    .celebration.show {
      display: grid;
      animation: bounce 600ms ease infinite alternate;
    }

    .status {
      min-height: 1.2em;
      color: #b91c1c;
    }

    @keyframes bounce {
      from {
        transform: translateY(0);
      }
      to {
        transform: translateY(-18px);
      }
    }

    @media (max-width: 600px) {
      .summary {
        grid-template-columns: 1fr;
        gap: 20px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <div id="celebration" class="celebration {{CELEBRATE}}">🎉</div>

  <header class="top">
    <div class="wrap brand">
      <div>
        <h1>BeeLiever Diary</h1>
        <p id="long-date" data-date="{{DATE}}">{{LONG_DATE}}</p>
      </div>
      <span class="badge"><span id="badge-count">{{COMPLETED}}</span>/{{TOTAL}} completed</span>
    </div>
  </header>

  <main class="wrap">
    <section class="card">
      <div class="progress-head">
        <div>
          <h2>Today's Progress</h2>
          <p>Keep up the great work, BeeLiever!</p>
        </div>
        <div>
          <div class="percent"><span id="percent">{{PERCENT}}</span>%</div>
          <div>Complete</div>
        </div>
        <div id="mascot" class="mascot">{{MASCOT}}</div>
      </div>
      <div class="bar"><div id="bar" style="width: {{PERCENT}}%"></div></div>
      <div id="banner" class="banner" {{BANNER_HIDDEN}}>
        <div>🎉</div>
        <p><strong>Congratulations! You're a true BeeLiever today!</strong></p>
        <p>You've completed all of your daily activities</p>
      </div>
    </section>

    <section>
      <h2>Daily Activities</h2>
      <div class="grid">{{TASKS}}
      </div>
    </section>

    <section>
      <h2>Optional Activities</h2>
      <div class="grid">{{ROLES}}
      </div>
    </section>

    <section class="card">
      <h2>Daily Summary</h2>
      <div class="summary">
        <div>
          <div>📊</div>
          <strong id="summary-count">{{COMPLETED}}</strong>
          <span>Tasks completed today</span>
        </div>
        <div>
          <div id="summary-trophy">{{TROPHY}}</div>
          <strong id="summary-status">{{STATUS}}</strong>
          <span>BeeLiever status</span>
        </div>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const CELEBRATION_MS = {{CELEBRATION_MS}};
    const celebrationEl = document.getElementById('celebration');
    const statusEl = document.getElementById('status');

    const celebrate = () => {
      celebrationEl.classList.add('show');
      setTimeout(() => celebrationEl.classList.remove('show'), CELEBRATION_MS);
    };

    const updateProgress = (progress) => {
      const done = new Set(progress.completed);
      document.getElementById('badge-count').textContent = progress.completed_count;
      document.getElementById('percent').textContent = progress.progress_percent;
      document.getElementById('bar').style.width = `${progress.progress_percent}%`;
      document.getElementById('summary-count').textContent = progress.completed_count;
      document.getElementById('mascot').textContent = progress.is_fully_complete ? '🏆' : '🐝';
      document.getElementById('summary-trophy').textContent = progress.is_fully_complete ? '🏆' : '🎯';
      document.getElementById('summary-status').textContent = progress.is_fully_complete ? 'Achieved' : 'In Progress';
      document.getElementById('banner').hidden = !progress.is_fully_complete;

      document.querySelectorAll('.task').forEach((card) => {
        const isDone = done.has(card.dataset.task);
        card.classList.toggle('done', isDone);
        card.querySelector('.task-icon').textContent = isDone ? '✔' : '•';
        card.querySelector('button').textContent = isDone ? 'Completed' : 'Mark Done';
      });
    };

    document.querySelectorAll('form[data-toggle]').forEach((form) => {
      form.addEventListener('submit', async (event) => {
        event.preventDefault();
        try {
          const response = await fetch('/api/toggle', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ id: form.dataset.toggle })
          });
          if (!response.ok) {
            statusEl.textContent = await response.text();
            return;
          }
          statusEl.textContent = '';
          const data = await response.json();
          updateProgress(data.progress);
          if (data.celebrate) {
            celebrate();
          }
        } catch (err) {
          statusEl.textContent = 'Could not reach the server.';
        }
      });
    });

    if (celebrationEl.classList.contains('show')) {
      history.replaceState(null, '', '/');
      setTimeout(() => celebrationEl.classList.remove('show'), CELEBRATION_MS);
    }
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DAILY_TASKS, OPTIONAL_ROLES};

    fn render(completed: &[&str], celebrate: bool) -> String {
        let completed: BTreeSet<String> = completed.iter().map(|id| id.to_string()).collect();
        let view = IndexView {
            date: "2024-06-01",
            completed: &completed,
            progress: Progress::compute(&completed, DAILY_TASKS),
            tasks: DAILY_TASKS,
            roles: OPTIONAL_ROLES,
            celebrate,
        };
        render_index(&view)
    }

    #[test]
    fn renders_catalog_and_progress() {
        let html = render(&["daily-claim"], false);
        assert!(html.contains("Saturday, June 1, 2024"));
        assert!(html.contains(r#"<span id="percent">25</span>"#));
        assert!(html.contains("/4 completed"));
        for task in DAILY_TASKS {
            assert!(html.contains(task.title));
            assert!(html.contains(&format!("/tasks/{}/toggle", task.id)));
        }
        for role in OPTIONAL_ROLES {
            assert!(html.contains(role.title));
        }
        assert!(html.contains("In Progress"));
        assert!(html.contains(r#"class="banner" hidden"#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn marks_completed_tasks() {
        let html = render(&["daily-claim"], false);
        assert!(html.contains(r#"class="task done" data-task="daily-claim""#));
        assert!(html.contains(r#"class="task" data-task="testnet-swap""#));
    }

    #[test]
    fn full_completion_shows_banner() {
        let html = render(
            &["testnet-swap", "daily-claim", "discord-activity", "twitter-engagement"],
            false,
        );
        assert!(html.contains("Achieved"));
        assert!(html.contains(r#"class="banner" >"#));
    }

    #[test]
    fn celebration_flag_shows_overlay() {
        assert!(render(&[], true).contains(r#"class="celebration show""#));
        assert!(render(&[], false).contains(r#"class="celebration ""#));
    }
}
