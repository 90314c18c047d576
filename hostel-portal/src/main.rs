use hostel_portal::handler::Render;
use hostel_portal::storage::open_store;
use hostel_portal::{
    Action, PortalSession, Route, View, ViewUpdate, print_banner, setup_environment,
};
use shared::models::{CatalogRoomNumber, HostelCategory, RoomFilter, RoomType};

/// Scripted walk through both dashboards, printing every view update
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 工作目录, 日志)
    let config = setup_environment()?;

    print_banner();
    tracing::info!(environment = %config.environment, "Hostel portal demo starting...");

    // 2. 快照存储在所有会话间共享
    let store = open_store(config.persist_snapshot, &config.work_dir())?;

    // 3. 学生: 登录 → 选房 → 确认
    let mut login = PortalSession::new(Route::Login, config.clone(), store.clone());
    report("mount login", &login.mount());
    report(
        "student login",
        &login
            .handle(Action::Login {
                username: "student".into(),
                password: "student123".into(),
            })
            .await,
    );

    let mut student = PortalSession::new(Route::StudentDashboard, config.clone(), store.clone());
    report("mount student dashboard", &student.mount());
    report(
        "select boys hostel",
        &student.handle(Action::SelectHostelType(HostelCategory::Boys)).await,
    );
    report(
        "filter ac-single",
        &student
            .handle(Action::FilterRoomType(RoomFilter::Only(RoomType::AcSingle)))
            .await,
    );
    let room: CatalogRoomNumber = "A-108".parse()?;
    report("click A-108", &student.handle(Action::ClickRoom(room)).await);
    report("confirm booking", &student.handle(Action::ConfirmBooking).await);
    report(
        "select again",
        &student.handle(Action::SelectHostelType(HostelCategory::Girls)).await,
    );
    report("logout", &student.handle(Action::Logout).await);

    // 4. 管理员: 登录 → 接受/拒绝请求
    report(
        "admin login",
        &login
            .handle(Action::Login {
                username: "admin".into(),
                password: "admin123".into(),
            })
            .await,
    );
    let mut admin = PortalSession::new(Route::AdminDashboard, config.clone(), store);
    report("mount admin dashboard", &admin.mount());
    report("accept request 1", &admin.handle(Action::AcceptRequest(1)).await);
    report("decline request 2", &admin.handle(Action::DeclineRequest(2)).await);
    report("students view", &admin.handle(Action::SwitchView(View::Students)).await);
    report("logout", &admin.handle(Action::Logout).await);

    tracing::info!("Demo finished");
    Ok(())
}

fn report(step: &str, update: &ViewUpdate) {
    let summary = match &update.render {
        Render::RoomSelection(view) => format!(
            "room selection: {} blocks, {} selectable",
            view.blocks.len(),
            view.rooms().filter(|r| r.selectable).count()
        ),
        render => serde_json::to_string(render).unwrap_or_else(|e| format!("<{e}>")),
    };
    println!("▶ {step}: {summary}");
    for n in &update.notifications {
        println!("    [{}] {}", n.kind, n.message);
    }
}
