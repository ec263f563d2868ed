use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::admin::model::{
    AccountActionDto, AccountActionResponse, AccountType, ClockInDto, ClockInResponse,
    GenerateCodeResponse, StaffListResponse, StatsResponse, StudentListResponse,
    ValidateStudentDto, ValidateStudentResponse,
};
use crate::modules::auth::model::{
    AdminLoginRequest, AdminLoginResponse, AdminProfile, ParentLoginRequest, ParentLoginResponse,
    ParentStudentSummary, Role, StaffLoginRequest, StaffLoginResponse, StudentLoginRequest,
    StudentLoginResponse,
};
use crate::modules::parents::model::{ParentDashboardResponse, SubjectPerformance};
use crate::modules::staff::model::{
    RegisterStaffDto, RegisterStaffResponse, Staff, StaffStatus, VerifyCodeDto, VerifyCodeResponse,
};
use crate::modules::students::model::{
    MessageResponse, PaymentStatus, Programme, RegisterStudentDto, RegisterStudentResponse,
    Student, StudentStatus, UpdatePasswordDto,
};
use crate::utils::errors::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_student,
        crate::modules::auth::controller::login_parent,
        crate::modules::auth::controller::login_admin,
        crate::modules::students::controller::register_student,
        crate::modules::students::controller::get_profile,
        crate::modules::students::controller::update_password,
        crate::modules::staff::controller::verify_code,
        crate::modules::staff::controller::register_staff,
        crate::modules::staff::controller::login_staff,
        crate::modules::admin::controller::list_students,
        crate::modules::admin::controller::list_staff,
        crate::modules::admin::controller::get_stats,
        crate::modules::admin::controller::validate_student,
        crate::modules::admin::controller::suspend_account,
        crate::modules::admin::controller::delete_account,
        crate::modules::admin::controller::clock_in,
        crate::modules::admin::controller::generate_staff_code,
        crate::modules::parents::controller::get_student_dashboard,
    ),
    components(
        schemas(
            Role,
            StudentLoginRequest,
            StudentLoginResponse,
            StaffLoginRequest,
            StaffLoginResponse,
            ParentLoginRequest,
            ParentLoginResponse,
            ParentStudentSummary,
            AdminLoginRequest,
            AdminLoginResponse,
            AdminProfile,
            Student,
            Programme,
            StudentStatus,
            PaymentStatus,
            RegisterStudentDto,
            RegisterStudentResponse,
            UpdatePasswordDto,
            MessageResponse,
            Staff,
            StaffStatus,
            VerifyCodeDto,
            VerifyCodeResponse,
            RegisterStaffDto,
            RegisterStaffResponse,
            AccountType,
            StudentListResponse,
            StaffListResponse,
            StatsResponse,
            ValidateStudentDto,
            ValidateStudentResponse,
            AccountActionDto,
            AccountActionResponse,
            ClockInDto,
            ClockInResponse,
            GenerateCodeResponse,
            ParentDashboardResponse,
            SubjectPerformance,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login endpoints for every principal"),
        (name = "Students", description = "Student registration and self-service"),
        (name = "Staff", description = "Staff onboarding and login"),
        (name = "Admin", description = "Record administration (admin only)"),
        (name = "Parents", description = "Parent dashboard (parent only)")
    ),
    info(
        title = "Registra API",
        version = "0.1.0",
        description = "REST backend for Merit College: registration, authentication and record administration for students, staff, parents and admins.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
