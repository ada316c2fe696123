//! Built-in demo outline: a survey of IT technology topics.

/// The default outline shipped with the application; used by the CLI's
/// `--sample` flag and as realistic test input.
pub const IT_TECHNOLOGY: &str = "mindmap
  root((IT Technology))
    Programming Languages
      Frontend
        JavaScript
          React
          Vue.js
          Angular
        TypeScript
        CSS
          Tailwind CSS
          SCSS
      Backend
        Python
          Django
          FastAPI
        Node.js
          Express
          NestJS
        Java
          Spring Boot
        Go
        Rust
    Databases
      Relational
        PostgreSQL
        MySQL
        SQLite
      NoSQL
        MongoDB
        Redis
        Cassandra
      Graph
        Neo4j
    Cloud Services
      AWS
        EC2
        S3
        Lambda
        RDS
      Azure
        Virtual Machines
        Blob Storage
        Functions
      Google Cloud
        Compute Engine
        Cloud Storage
        Cloud Functions
    DevOps
      Containerization
        Docker
        Kubernetes
      CI/CD
        GitHub Actions
        Jenkins
        GitLab CI
      Monitoring
        Prometheus
        Grafana
        ELK Stack
    Security
      Authentication
        OAuth
        JWT
        SAML
      Encryption
        TLS/SSL
        AES
      Penetration Testing
        OWASP
        Vulnerability Assessment";
