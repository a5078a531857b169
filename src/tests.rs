#[cfg(test)]
mod integration_tests {
    use crate::handlers::courses::{CreateCourseRequest, ProgressStatus, UpdateCourseRequest};
    use crate::handlers::students::CreateStudentRequest;
    use crate::handlers::subcourses::{CreateSubCourseRequest, UpdateSubCourseRequest};
    use crate::handlers::trainers::{CreateTrainerRequest, Gender};
    use crate::schemas::ApiResponse;
    use crate::test_utils::test_utils::setup_test_app;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::NaiveDate;

    fn trainer_request(name: &str, aadhar: &str) -> CreateTrainerRequest {
        CreateTrainerRequest {
            name: name.to_string(),
            dob: NaiveDate::from_ymd_opt(1985, 4, 12).unwrap(),
            aadhar: aadhar.to_string(),
            gender: Gender::Female,
            address: Some("12 MG Road, Pune".to_string()),
            educational_qualification: Some("M.Sc. Physics".to_string()),
        }
    }

    fn student_request(name: &str, aadhar: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            name: name.to_string(),
            dob: NaiveDate::from_ymd_opt(2001, 9, 3).unwrap(),
            aadhar: aadhar.to_string(),
            gender: Gender::Male,
            address: None,
            educational_qualification: Some("B.Com".to_string()),
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_create_trainer() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = trainer_request("Asha Verma", "111122223333");

        let response = server.post("/api/trainers").json(&create_request).await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Trainer registered successfully");

        // The returned record echoes the submitted fields plus an assigned id
        let trainer_data = &body.data;
        assert!(trainer_data["id"].as_i64().unwrap() > 0);
        assert_eq!(trainer_data["name"], "Asha Verma");
        assert_eq!(trainer_data["dob"], "1985-04-12");
        assert_eq!(trainer_data["aadhar"], "111122223333");
        assert_eq!(trainer_data["gender"], "female");
        assert_eq!(trainer_data["address"], "12 MG Road, Pune");
        assert_eq!(trainer_data["educational_qualification"], "M.Sc. Physics");
    }

    #[tokio::test]
    async fn test_create_trainer_blank_name() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = trainer_request("", "111122223333");

        let response = server.post("/api/trainers").json(&create_request).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let error_body: serde_json::Value = response.json();
        assert_eq!(error_body["success"], false);
        assert_eq!(error_body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_trainer_malformed_aadhar() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Aadhar numbers are 12 characters
        let create_request = trainer_request("Asha Verma", "1234");

        let response = server.post("/api/trainers").json(&create_request).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let error_body: serde_json::Value = response.json();
        assert_eq!(error_body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_trainer_duplicate_aadhar() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = trainer_request("Asha Verma", "111122223333");
        let response1 = server.post("/api/trainers").json(&create_request).await;
        response1.assert_status(StatusCode::CREATED);

        // Same aadhar again must be rejected as a client error
        let duplicate_request = trainer_request("Someone Else", "111122223333");
        let response2 = server.post("/api/trainers").json(&duplicate_request).await;

        response2.assert_status(StatusCode::BAD_REQUEST);
        let error_body: serde_json::Value = response2.json();
        assert_eq!(error_body["success"], false);
        assert_eq!(error_body["code"], "AADHAR_ALREADY_EXISTS");
        assert!(error_body["error"]
            .as_str()
            .unwrap()
            .contains("111122223333"));
    }

    #[tokio::test]
    async fn test_get_trainers() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        server
            .post("/api/trainers")
            .json(&trainer_request("Asha Verma", "111122223333"))
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post("/api/trainers")
            .json(&trainer_request("Ravi Nair", "444455556666"))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.get("/api/trainers").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Trainers retrieved successfully");
        assert_eq!(body.data.len(), 2);
        assert!(body.data.iter().any(|t| t["name"] == "Asha Verma"));
        assert!(body.data.iter().any(|t| t["name"] == "Ravi Nair"));
    }

    #[tokio::test]
    async fn test_create_student() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = student_request("Kiran Rao", "777788889999");

        let response = server.post("/api/students").json(&create_request).await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.data["name"], "Kiran Rao");
        assert_eq!(body.data["gender"], "male");
        assert_eq!(body.data["address"], serde_json::Value::Null);
        assert!(body.data["id"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_aadhar_uniqueness_is_scoped_per_entity() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // A trainer and a student may carry the same aadhar; the unique
        // constraint lives on each table separately
        server
            .post("/api/trainers")
            .json(&trainer_request("Asha Verma", "111122223333"))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .post("/api/students")
            .json(&student_request("Kiran Rao", "111122223333"))
            .await;
        response.assert_status(StatusCode::CREATED);

        // But a second student with that aadhar is rejected
        let response = server
            .post("/api/students")
            .json(&student_request("Another Student", "111122223333"))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_course_default_status() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateCourseRequest {
            title: "Welding Basics".to_string(),
            thumbnail: None,
            redirection_link: None,
            status: None,
        };

        let response = server.post("/api/courses").json(&create_request).await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.data["title"], "Welding Basics");
        // Status defaults when omitted
        assert_eq!(body.data["status"], "Not Started");
    }

    #[tokio::test]
    async fn test_create_course_with_explicit_status() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateCourseRequest {
            title: "Electrical Safety".to_string(),
            thumbnail: Some("https://cdn.example.com/electrical.png".to_string()),
            redirection_link: Some("https://lms.example.com/electrical".to_string()),
            status: Some(ProgressStatus::InProgress),
        };

        let response = server.post("/api/courses").json(&create_request).await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["status"], "In Progress");
        assert_eq!(
            body.data["thumbnail"],
            "https://cdn.example.com/electrical.png"
        );
    }

    #[tokio::test]
    async fn test_create_course_invalid_thumbnail_url() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateCourseRequest {
            title: "Welding Basics".to_string(),
            thumbnail: Some("not a url".to_string()),
            redirection_link: None,
            status: None,
        };

        let response = server.post("/api/courses").json(&create_request).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let error_body: serde_json::Value = response.json();
        assert_eq!(error_body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_fields_are_rejected() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Open field bags are not passed through to the store; an unknown
        // key fails deserialization of the typed request
        let payload = serde_json::json!({
            "title": "Welding Basics",
            "instructor": "not a real field"
        });

        let response = server.post("/api/courses").json(&payload).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_get_courses_with_nested_subcourses_ordered() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Two courses, modules attached to each
        let course1_response = server
            .post("/api/courses")
            .json(&CreateCourseRequest {
                title: "Welding Basics".to_string(),
                thumbnail: None,
                redirection_link: None,
                status: None,
            })
            .await;
        course1_response.assert_status(StatusCode::CREATED);
        let course1: ApiResponse<serde_json::Value> = course1_response.json();
        let course1_id = course1.data["id"].as_i64().unwrap() as i32;

        let course2_response = server
            .post("/api/courses")
            .json(&CreateCourseRequest {
                title: "Electrical Safety".to_string(),
                thumbnail: None,
                redirection_link: None,
                status: None,
            })
            .await;
        course2_response.assert_status(StatusCode::CREATED);
        let course2: ApiResponse<serde_json::Value> = course2_response.json();
        let course2_id = course2.data["id"].as_i64().unwrap() as i32;

        for (title, course_id) in [
            ("Module 1: Equipment", course1_id),
            ("Module 2: Joints", course1_id),
            ("Grounding", course2_id),
        ] {
            server
                .post("/api/subcourses")
                .json(&CreateSubCourseRequest {
                    title: title.to_string(),
                    description: None,
                    link: None,
                    status: None,
                    course_id,
                })
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server.get("/api/courses").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert!(body.success);
        assert_eq!(body.data.len(), 2);

        // Courses come back ordered by id, each with exactly its own modules
        assert_eq!(body.data[0]["id"].as_i64().unwrap() as i32, course1_id);
        assert_eq!(body.data[1]["id"].as_i64().unwrap() as i32, course2_id);

        let course1_subs = body.data[0]["subcourses"].as_array().unwrap();
        assert_eq!(course1_subs.len(), 2);
        assert_eq!(course1_subs[0]["title"], "Module 1: Equipment");
        assert_eq!(course1_subs[1]["title"], "Module 2: Joints");
        assert!(course1_subs[0]["id"].as_i64().unwrap() < course1_subs[1]["id"].as_i64().unwrap());

        let course2_subs = body.data[1]["subcourses"].as_array().unwrap();
        assert_eq!(course2_subs.len(), 1);
        assert_eq!(course2_subs[0]["title"], "Grounding");
    }

    #[tokio::test]
    async fn test_get_course_by_id() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_response = server
            .post("/api/courses")
            .json(&CreateCourseRequest {
                title: "Welding Basics".to_string(),
                thumbnail: None,
                redirection_link: None,
                status: None,
            })
            .await;
        create_response.assert_status(StatusCode::CREATED);
        let create_body: ApiResponse<serde_json::Value> = create_response.json();
        let course_id = create_body.data["id"].as_i64().unwrap();

        let response = server.get(&format!("/api/courses/{}", course_id)).await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["id"], course_id);
        assert_eq!(body.data["title"], "Welding Basics");
        assert!(body.data["subcourses"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_course_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/courses/999999").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let error_body: serde_json::Value = response.json();
        assert_eq!(error_body["code"], "COURSE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_update_course_status_only_leaves_other_fields() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_response = server
            .post("/api/courses")
            .json(&CreateCourseRequest {
                title: "Welding Basics".to_string(),
                thumbnail: Some("https://cdn.example.com/welding.png".to_string()),
                redirection_link: Some("https://lms.example.com/welding".to_string()),
                status: None,
            })
            .await;
        create_response.assert_status(StatusCode::CREATED);
        let create_body: ApiResponse<serde_json::Value> = create_response.json();
        let course_id = create_body.data["id"].as_i64().unwrap();

        // Status-only update
        let update_request = UpdateCourseRequest {
            title: None,
            thumbnail: None,
            redirection_link: None,
            status: Some(ProgressStatus::InProgress),
        };

        let response = server
            .put(&format!("/api/courses/{}", course_id))
            .json(&update_request)
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);

        // The full record comes back, everything but status untouched
        assert_eq!(body.data["id"], course_id);
        assert_eq!(body.data["title"], "Welding Basics");
        assert_eq!(body.data["thumbnail"], "https://cdn.example.com/welding.png");
        assert_eq!(
            body.data["redirection_link"],
            "https://lms.example.com/welding"
        );
        assert_eq!(body.data["status"], "In Progress");

        // And it persisted
        let get_response = server.get(&format!("/api/courses/{}", course_id)).await;
        get_response.assert_status(StatusCode::OK);
        let get_body: ApiResponse<serde_json::Value> = get_response.json();
        assert_eq!(get_body.data["status"], "In Progress");
        assert_eq!(get_body.data["title"], "Welding Basics");
    }

    #[tokio::test]
    async fn test_update_course_full_edit() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_response = server
            .post("/api/courses")
            .json(&CreateCourseRequest {
                title: "Welding Basics".to_string(),
                thumbnail: None,
                redirection_link: None,
                status: None,
            })
            .await;
        create_response.assert_status(StatusCode::CREATED);
        let create_body: ApiResponse<serde_json::Value> = create_response.json();
        let course_id = create_body.data["id"].as_i64().unwrap();

        let update_request = UpdateCourseRequest {
            title: Some("Advanced Welding".to_string()),
            thumbnail: Some("https://cdn.example.com/advanced.png".to_string()),
            redirection_link: Some("https://lms.example.com/advanced".to_string()),
            status: Some(ProgressStatus::Completed),
        };

        let response = server
            .put(&format!("/api/courses/{}", course_id))
            .json(&update_request)
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["title"], "Advanced Welding");
        assert_eq!(body.data["status"], "Completed");
    }

    #[tokio::test]
    async fn test_update_course_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let update_request = UpdateCourseRequest {
            title: None,
            thumbnail: None,
            redirection_link: None,
            status: Some(ProgressStatus::InProgress),
        };

        let response = server.put("/api/courses/999999").json(&update_request).await;

        response.assert_status(StatusCode::NOT_FOUND);
        let error_body: serde_json::Value = response.json();
        assert_eq!(error_body["success"], false);
        assert_eq!(error_body["code"], "COURSE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_create_subcourse_with_invalid_course_id() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateSubCourseRequest {
            title: "Orphan Module".to_string(),
            description: None,
            link: None,
            status: None,
            course_id: 999, // This course doesn't exist
        };

        let response = server.post("/api/subcourses").json(&create_request).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let error_body: serde_json::Value = response.json();
        assert_eq!(error_body["success"], false);
        assert_eq!(error_body["code"], "INVALID_COURSE_ID");
        assert!(error_body["error"]
            .as_str()
            .unwrap()
            .contains("Course with id 999 does not exist"));
    }

    #[tokio::test]
    async fn test_create_subcourse_blank_title() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let course_response = server
            .post("/api/courses")
            .json(&CreateCourseRequest {
                title: "Welding Basics".to_string(),
                thumbnail: None,
                redirection_link: None,
                status: None,
            })
            .await;
        course_response.assert_status(StatusCode::CREATED);
        let course_body: ApiResponse<serde_json::Value> = course_response.json();

        let create_request = CreateSubCourseRequest {
            title: "".to_string(),
            description: None,
            link: None,
            status: None,
            course_id: course_body.data["id"].as_i64().unwrap() as i32,
        };

        let response = server.post("/api/subcourses").json(&create_request).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let error_body: serde_json::Value = response.json();
        assert_eq!(error_body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_update_subcourse_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let update_request = UpdateSubCourseRequest {
            title: None,
            description: None,
            link: None,
            status: Some(ProgressStatus::Completed),
        };

        let response = server
            .put("/api/subcourses/999999")
            .json(&update_request)
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let error_body: serde_json::Value = response.json();
        assert_eq!(error_body["code"], "SUBCOURSE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_delete_course_cascades_to_subcourses() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let course_response = server
            .post("/api/courses")
            .json(&CreateCourseRequest {
                title: "Welding Basics".to_string(),
                thumbnail: None,
                redirection_link: None,
                status: None,
            })
            .await;
        course_response.assert_status(StatusCode::CREATED);
        let course_body: ApiResponse<serde_json::Value> = course_response.json();
        let course_id = course_body.data["id"].as_i64().unwrap() as i32;

        for n in 1..=2 {
            server
                .post("/api/subcourses")
                .json(&CreateSubCourseRequest {
                    title: format!("Module {n}"),
                    description: None,
                    link: None,
                    status: None,
                    course_id,
                })
                .await
                .assert_status(StatusCode::CREATED);
        }

        // Delete the course
        let response = server.delete(&format!("/api/courses/{}", course_id)).await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<String> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Course deleted successfully");
        assert_eq!(body.data, format!("Course {} deleted", course_id));

        // The course is gone
        let get_response = server.get(&format!("/api/courses/{}", course_id)).await;
        get_response.assert_status(StatusCode::NOT_FOUND);

        // And no orphan subcourses remain
        let subs_response = server
            .get(&format!("/api/courses/{}/subcourses", course_id))
            .await;
        subs_response.assert_status(StatusCode::OK);
        let subs_body: ApiResponse<Vec<serde_json::Value>> = subs_response.json();
        assert!(subs_body.data.is_empty());
    }

    #[tokio::test]
    async fn test_delete_course_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.delete("/api/courses/999999").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let error_body: serde_json::Value = response.json();
        assert_eq!(error_body["code"], "COURSE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_delete_subcourse() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let course_response = server
            .post("/api/courses")
            .json(&CreateCourseRequest {
                title: "Welding Basics".to_string(),
                thumbnail: None,
                redirection_link: None,
                status: None,
            })
            .await;
        course_response.assert_status(StatusCode::CREATED);
        let course_body: ApiResponse<serde_json::Value> = course_response.json();
        let course_id = course_body.data["id"].as_i64().unwrap() as i32;

        let sub_response = server
            .post("/api/subcourses")
            .json(&CreateSubCourseRequest {
                title: "Module 1".to_string(),
                description: None,
                link: None,
                status: None,
                course_id,
            })
            .await;
        sub_response.assert_status(StatusCode::CREATED);
        let sub_body: ApiResponse<serde_json::Value> = sub_response.json();
        let subcourse_id = sub_body.data["id"].as_i64().unwrap();

        let response = server
            .delete(&format!("/api/subcourses/{}", subcourse_id))
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<String> = response.json();
        assert_eq!(body.data, format!("SubCourse {} deleted", subcourse_id));

        // Deleting again is a 404
        let second = server
            .delete(&format!("/api/subcourses/{}", subcourse_id))
            .await;
        second.assert_status(StatusCode::NOT_FOUND);
    }

    /// The full catalog flow over the wire: create a course, attach a
    /// module, list the catalog, complete the module, and observe the
    /// completion on a subsequent read.
    #[tokio::test]
    async fn test_course_catalog_end_to_end() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // POST a course; the fresh store assigns id 1
        let course_response = server
            .post("/api/courses")
            .json(&CreateCourseRequest {
                title: "Intro to Go".to_string(),
                thumbnail: None,
                redirection_link: None,
                status: None,
            })
            .await;
        course_response.assert_status(StatusCode::CREATED);
        let course_body: ApiResponse<serde_json::Value> = course_response.json();
        assert_eq!(course_body.data["id"], 1);
        assert_eq!(course_body.data["status"], "Not Started");

        // POST a subcourse against it
        let sub_response = server
            .post("/api/subcourses")
            .json(&CreateSubCourseRequest {
                title: "Module 1".to_string(),
                description: None,
                link: None,
                status: None,
                course_id: 1,
            })
            .await;
        sub_response.assert_status(StatusCode::CREATED);
        let sub_body: ApiResponse<serde_json::Value> = sub_response.json();
        assert_eq!(sub_body.data["id"], 1);

        // The listing nests the module under its course
        let list_response = server.get("/api/courses").await;
        list_response.assert_status(StatusCode::OK);
        let list_body: ApiResponse<Vec<serde_json::Value>> = list_response.json();
        assert_eq!(list_body.data.len(), 1);
        let subcourses = list_body.data[0]["subcourses"].as_array().unwrap();
        assert_eq!(subcourses.len(), 1);
        assert_eq!(subcourses[0]["id"], 1);
        assert_eq!(subcourses[0]["title"], "Module 1");
        assert_eq!(subcourses[0]["status"], "Not Started");

        // Complete the module
        let update_response = server
            .put("/api/subcourses/1")
            .json(&UpdateSubCourseRequest {
                title: None,
                description: None,
                link: None,
                status: Some(ProgressStatus::Completed),
            })
            .await;
        update_response.assert_status(StatusCode::OK);
        let update_body: ApiResponse<serde_json::Value> = update_response.json();
        assert_eq!(update_body.data["status"], "Completed");

        // A subsequent read reflects the new status
        let final_response = server.get("/api/courses/1/subcourses").await;
        final_response.assert_status(StatusCode::OK);
        let final_body: ApiResponse<Vec<serde_json::Value>> = final_response.json();
        assert_eq!(final_body.data.len(), 1);
        assert_eq!(final_body.data[0]["status"], "Completed");
    }

    #[tokio::test]
    async fn test_status_transitions_are_unconstrained() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let course_response = server
            .post("/api/courses")
            .json(&CreateCourseRequest {
                title: "Welding Basics".to_string(),
                thumbnail: None,
                redirection_link: None,
                status: Some(ProgressStatus::Completed),
            })
            .await;
        course_response.assert_status(StatusCode::CREATED);
        let course_body: ApiResponse<serde_json::Value> = course_response.json();
        let course_id = course_body.data["id"].as_i64().unwrap();

        // Completed may move straight back to Not Started; no ordering is
        // enforced between the three states
        for status in [
            ProgressStatus::NotStarted,
            ProgressStatus::Completed,
            ProgressStatus::InProgress,
        ] {
            let response = server
                .put(&format!("/api/courses/{}", course_id))
                .json(&UpdateCourseRequest {
                    title: None,
                    thumbnail: None,
                    redirection_link: None,
                    status: Some(status),
                })
                .await;
            response.assert_status(StatusCode::OK);
        }

        let final_response = server.get(&format!("/api/courses/{}", course_id)).await;
        let final_body: ApiResponse<serde_json::Value> = final_response.json();
        assert_eq!(final_body.data["status"], "In Progress");
    }
}
