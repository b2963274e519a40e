//! One-shot demo data seeder.
//!
//! Populates a fixed roster of users, teams, equipment and maintenance
//! requests for manual testing. Not idempotent: running it twice fails on
//! the first uniqueness constraint (email, serial number, team name) and
//! aborts the remaining inserts.

use chrono::{Duration, Utc};
use sqlx::postgres::PgPoolOptions;

use gearguard_server::{
    config::AppConfig,
    models::{
        enums::{RequestStatus, RequestType},
        equipment::CreateEquipment,
        request::{CreateRequest, UpdateRequest},
        team::CreateTeam,
        user::CreateUser,
    },
    repository::Repository,
    services::Services,
};

const IMAGE_URL: &str = "https://images.pexels.com/photos/35383624/pexels-photo-35383624.jpeg";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let config = AppConfig::load().expect("Failed to load configuration");

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database.url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let repository = Repository::new(pool);
    let services = Services::new(repository, config.llm.clone());

    // Users
    let mut users = Vec::new();
    for (name, email, role, avatar) in [
        ("John Smith", "john@gearguard.com", "Technician", 1),
        ("Sarah Johnson", "sarah@gearguard.com", "Manager", 2),
        ("Mike Wilson", "mike@gearguard.com", "Technician", 3),
        ("Emily Davis", "emily@gearguard.com", "Technician", 4),
    ] {
        let user = services
            .users
            .create(&CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                role: role.to_string(),
                avatar: Some(format!("https://i.pravatar.cc/150?img={}", avatar)),
            })
            .await?;
        users.push(user);
    }
    tracing::info!("Created {} users", users.len());

    // Teams with member assignments
    let mechanical = services
        .teams
        .create(&CreateTeam {
            name: "Mechanical Team".to_string(),
            specialization: Some("Mechanical Equipment".to_string()),
            member_ids: vec![users[0].id.clone(), users[1].id.clone()],
        })
        .await?;
    let electrical = services
        .teams
        .create(&CreateTeam {
            name: "Electrical Team".to_string(),
            specialization: Some("Electrical Systems".to_string()),
            member_ids: vec![users[2].id.clone()],
        })
        .await?;
    let it_support = services
        .teams
        .create(&CreateTeam {
            name: "IT Support".to_string(),
            specialization: Some("Computer Equipment".to_string()),
            member_ids: vec![users[3].id.clone()],
        })
        .await?;
    tracing::info!("Created 3 teams");

    // Equipment
    let equipment_specs = [
        ("CNC Machine #1", "CNC-2024-001", "Production", "Manufacturing", None, "Factory Floor A", &mechanical),
        ("Hydraulic Press", "HP-2024-002", "Production", "Manufacturing", None, "Factory Floor B", &mechanical),
        ("Generator #3", "GEN-2024-003", "Power", "Facilities", None, "Power Room", &electrical),
        ("Server Rack #1", "SRV-2024-004", "IT", "IT Department", Some("Emily Davis"), "Data Center", &it_support),
        ("Conveyor Belt System", "CBS-2024-005", "Production", "Manufacturing", None, "Assembly Line", &mechanical),
    ];
    let mut equipment = Vec::new();
    for (name, serial, category, department, assigned_to, location, team) in equipment_specs {
        let item = services
            .equipment
            .create(&CreateEquipment {
                name: name.to_string(),
                serial_number: serial.to_string(),
                category: category.to_string(),
                department: Some(department.to_string()),
                assigned_to: assigned_to.map(str::to_string),
                location: location.to_string(),
                purchase_date: None,
                warranty_expiry: None,
                maintenance_team_id: Some(team.id.clone()),
                image_url: Some(IMAGE_URL.to_string()),
            })
            .await?;
        equipment.push(item);
    }
    tracing::info!("Created {} equipment items", equipment.len());

    // Maintenance requests; the team id is copied from the equipment on
    // creation, status/assignee/duration are applied through the patch path
    let now = Utc::now();

    services
        .requests
        .create(&CreateRequest {
            subject: "Oil Leak in CNC Machine".to_string(),
            description: Some(
                "Machine is leaking hydraulic oil near the base. Needs immediate attention."
                    .to_string(),
            ),
            request_type: RequestType::Corrective,
            equipment_id: equipment[0].id.clone(),
            scheduled_date: None,
            priority: "High".to_string(),
        })
        .await?;

    let routine = services
        .requests
        .create(&CreateRequest {
            subject: "Routine Maintenance - Hydraulic Press".to_string(),
            description: Some("Scheduled quarterly maintenance check.".to_string()),
            request_type: RequestType::Preventive,
            equipment_id: equipment[1].id.clone(),
            scheduled_date: Some(now + Duration::days(7)),
            priority: "Medium".to_string(),
        })
        .await?;
    services
        .requests
        .update(
            &routine.id,
            &UpdateRequest {
                status: Some(RequestStatus::InProgress),
                assigned_user_id: Some(Some(users[0].id.clone())),
                ..Default::default()
            },
        )
        .await?;

    services
        .requests
        .create(&CreateRequest {
            subject: "Generator Battery Replacement".to_string(),
            description: Some("Backup batteries showing low voltage, need replacement.".to_string()),
            request_type: RequestType::Preventive,
            equipment_id: equipment[2].id.clone(),
            scheduled_date: Some(now + Duration::days(3)),
            priority: "High".to_string(),
        })
        .await?;

    let cooling = services
        .requests
        .create(&CreateRequest {
            subject: "Server Cooling Fan Failure".to_string(),
            description: Some("Server rack cooling fan #2 has stopped working.".to_string()),
            request_type: RequestType::Corrective,
            equipment_id: equipment[3].id.clone(),
            scheduled_date: None,
            priority: "High".to_string(),
        })
        .await?;
    services
        .requests
        .update(
            &cooling.id,
            &UpdateRequest {
                status: Some(RequestStatus::InProgress),
                assigned_user_id: Some(Some(users[3].id.clone())),
                ..Default::default()
            },
        )
        .await?;

    let alignment = services
        .requests
        .create(&CreateRequest {
            subject: "Conveyor Belt Alignment Check".to_string(),
            description: Some("Monthly preventive check for belt alignment and tension.".to_string()),
            request_type: RequestType::Preventive,
            equipment_id: equipment[4].id.clone(),
            scheduled_date: Some(now - Duration::days(2)),
            priority: "Low".to_string(),
        })
        .await?;
    services
        .requests
        .update(
            &alignment.id,
            &UpdateRequest {
                status: Some(RequestStatus::Repaired),
                assigned_user_id: Some(Some(users[1].id.clone())),
                duration_hours: Some(Some(2.5)),
                ..Default::default()
            },
        )
        .await?;

    services
        .requests
        .create(&CreateRequest {
            subject: "Lubrication Service - CNC Machine".to_string(),
            description: Some("Weekly lubrication and cleaning service.".to_string()),
            request_type: RequestType::Preventive,
            equipment_id: equipment[0].id.clone(),
            scheduled_date: Some(now + Duration::days(14)),
            priority: "Medium".to_string(),
        })
        .await?;

    tracing::info!("Created 6 maintenance requests");
    tracing::info!("Sample data seeded successfully");

    Ok(())
}
